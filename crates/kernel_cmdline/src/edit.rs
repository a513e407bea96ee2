//! Apply a single edit request to a command line string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Parameter, ParameterList, Result};

/// The kind of edit to make.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Operation {
    /// Always add the parameter at the end.
    Append,
    /// Set every occurrence to the value, adding it if missing.
    #[default]
    Present,
    /// Remove occurrences with exactly this name and value.
    Absent,
    /// Remove every occurrence of the name.
    Purge,
}

impl Operation {
    /// All operations, in the order they are documented.
    pub const ALL: [Operation; 4] = [
        Operation::Append,
        Operation::Present,
        Operation::Absent,
        Operation::Purge,
    ];

    /// The lowercase name used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Append => "append",
            Operation::Present => "present",
            Operation::Absent => "absent",
            Operation::Purge => "purge",
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(format!(
                    "unknown state '{s}', expected one of: append, present, absent, purge"
                ))
            })
    }
}

impl TryFrom<String> for Operation {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One edit to apply to a command line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditRequest {
    /// The command line to edit.
    #[serde(default)]
    pub cmdline: String,
    /// The parameter name to operate on; must not be empty.
    pub name: String,
    /// The value to set, append or match; `None` means a key-only switch.
    #[serde(default)]
    pub value: Option<String>,
    /// What to do.
    #[serde(default, alias = "state")]
    pub operation: Operation,
    /// With [`Operation::Present`], also drop all but the last occurrence.
    #[serde(default)]
    pub remove_duplicates: bool,
}

impl EditRequest {
    /// Parse a request from its JSON representation.
    ///
    /// Any problem with the document is a validation error.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Validation(e.to_string()))
    }

    /// Check the request before anything is parsed.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Validation("'name' should be set".into()));
        }
        Ok(())
    }
}

/// The result of an edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    /// Whether the edit changed the command line.
    pub changed: bool,
    /// The edited command line, or the input unmodified when nothing changed.
    pub cmdline: String,
}

/// Apply one edit.
///
/// The request is validated first, then the command line is parsed and
/// edited. When nothing changes the input text is returned as-is, so
/// differences in spacing or quoting are never reported as changes.
pub fn edit(req: &EditRequest) -> Result<EditOutcome> {
    req.validate()?;
    let mut params = ParameterList::parse(&req.cmdline)?;
    let param = || Parameter::new(req.name.as_str(), req.value.as_deref());

    match req.operation {
        Operation::Append => {
            params.append(param()?);
        }
        Operation::Present => {
            params.set_or_append(param()?, true);
            if req.remove_duplicates {
                params.dedup_keep_last(&req.name);
            }
        }
        Operation::Absent => {
            params.remove_matching(&req.name, req.value.as_deref());
        }
        Operation::Purge => {
            params.remove_all(&req.name);
        }
    }
    if req.remove_duplicates && req.operation != Operation::Present {
        tracing::debug!("ignoring remove_duplicates for {}", req.operation);
    }

    let changed = params.changed();
    tracing::debug!("{} {}: changed={changed}", req.operation, req.name);
    let cmdline = if changed {
        params.to_string()
    } else {
        req.cmdline.clone()
    };
    Ok(EditOutcome { changed, cmdline })
}
