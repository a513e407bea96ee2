//! CLI argument definitions and request loading

use std::path::PathBuf;

use anyhow::{Context, Result};
use fn_error_context::context;
use kargs_kernel_cmdline::{EditRequest, Operation};

/// The environment variable that can be used to point at a JSON request.
const ARGS_VAR: &str = "KARGS_EDIT_ARGS";

/// Edit a kernel command line string.
///
/// Applies a single edit and prints a JSON object with `changed` and the
/// resulting `cmdline`. When nothing changed, `cmdline` is the input
/// exactly as given.
///
/// If --args-file (or the environment variable KARGS_EDIT_ARGS) is set,
/// the whole request is read from that JSON file instead, and the other
/// options are ignored.
#[derive(Debug, clap::Parser, PartialEq, Eq)]
#[clap(name = "kargs-edit", version)]
pub(crate) struct Opts {
    /// The command line to edit
    #[clap(long, default_value = "")]
    pub(crate) cmdline: String,

    /// The parameter name to operate on
    #[clap(long)]
    pub(crate) name: Option<String>,

    /// The value to set, append or match; omit it for a key-only switch
    #[clap(long)]
    pub(crate) value: Option<String>,

    /// One of append, present, absent or purge
    #[clap(long, default_value = "present")]
    pub(crate) state: String,

    /// With `present`, drop all but the last occurrence of the name
    #[clap(long)]
    pub(crate) remove_duplicates: bool,

    /// Read the request from this JSON file
    #[clap(long, env = ARGS_VAR)]
    pub(crate) args_file: Option<PathBuf>,
}

impl Opts {
    /// Build a request from the individual options.
    fn into_request(self) -> Result<EditRequest> {
        let operation: Operation = self.state.parse()?;
        Ok(EditRequest {
            cmdline: self.cmdline,
            // An empty name is rejected by validation, not by clap
            name: self.name.unwrap_or_default(),
            value: self.value,
            operation,
            remove_duplicates: self.remove_duplicates,
        })
    }
}

/// Load the request, from the args file if one was given.
#[context("Loading request")]
pub(crate) fn load_request(opts: Opts) -> Result<EditRequest> {
    let Some(path) = opts.args_file.as_deref() else {
        return opts.into_request();
    };
    let buf = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    let req = EditRequest::from_json(&buf)?;
    tracing::debug!("loaded request from {}", path.display());
    Ok(req)
}
