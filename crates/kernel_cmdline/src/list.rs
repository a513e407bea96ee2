//! An ordered, editable kernel command line.

use std::fmt;
use std::str::FromStr;

use crate::parameter::Parameter;
use crate::tokenize;
use crate::{Error, Result};

/// A parsed kernel command line.
///
/// Parameters are kept in the order they appear. Duplicate names are
/// allowed and meaningful, since later occurrences usually take
/// precedence.
///
/// Every editing method returns whether that call changed the content.
/// The list also remembers whether any edit changed it, see
/// [`Self::changed`].
#[derive(Clone, Debug, Default)]
pub struct ParameterList {
    params: Vec<Parameter>,
    changed: bool,
}

/// An iterator over the parameters of a [`ParameterList`].
///
/// This is created by the `iter` method on `ParameterList`.
#[derive(Debug)]
pub struct ParameterListIter<'a>(std::slice::Iter<'a, Parameter>);

impl<'a> Iterator for ParameterListIter<'a> {
    type Item = &'a Parameter;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl ParameterList {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a command line string.
    ///
    /// The input is split into words with shell quoting rules, and
    /// each word is parsed as a [`Parameter`]. An empty string gives an
    /// empty list.
    pub fn parse(cmdline: &str) -> Result<Self> {
        let params = tokenize::split(cmdline)?
            .iter()
            .map(|t| Parameter::parse(t))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            params,
            changed: false,
        })
    }

    /// Returns `true` once any edit has changed this list.
    ///
    /// This never goes back to `false`.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Returns an iterator over all parameters, in order.
    pub fn iter(&self) -> ParameterListIter<'_> {
        ParameterListIter(self.params.iter())
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Locate the first parameter with the given name.
    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name() == name)
    }

    /// Locate the value of the first parameter with the given name.
    ///
    /// Returns `None` both when it is missing and when it is a switch.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(|p| p.value())
    }

    fn record(&mut self, changed: bool) -> bool {
        self.changed |= changed;
        changed
    }

    /// Add a parameter at the end, even if one with the same name exists.
    ///
    /// This always changes the list.
    pub fn append(&mut self, param: Parameter) -> bool {
        tracing::debug!("appending {param}");
        self.params.push(param);
        self.record(true)
    }

    /// Set the value of every parameter with the same name as `param`.
    ///
    /// Every occurrence is updated, not just the first. Occurrences are
    /// replaced by `param`, so a switch can become a key-value pair and
    /// the other way around.
    ///
    /// If there is no parameter with this name and `append_if_missing` is
    /// set, `param` is added at the end.
    pub fn set_or_append(&mut self, param: Parameter, append_if_missing: bool) -> bool {
        let mut found = false;
        let mut changed = false;
        for existing in self.params.iter_mut().filter(|p| p.name() == param.name()) {
            found = true;
            if existing.value() != param.value() {
                tracing::debug!("replacing {existing} with {param}");
                *existing = param.clone();
                changed = true;
            }
        }
        if !found && append_if_missing {
            tracing::debug!("{} not found, appending {param}", param.name());
            self.params.push(param);
            changed = true;
        }
        self.record(changed)
    }

    /// Remove every parameter with exactly this name and value.
    ///
    /// A `None` value only matches switches, and a value only matches
    /// key-value pairs carrying that exact value.
    pub fn remove_matching(&mut self, name: &str, value: Option<&str>) -> bool {
        let before = self.params.len();
        self.params.retain(|p| !p.matches(name, value));
        let removed = before - self.params.len();
        tracing::debug!("removed {removed} exact matches of {name}");
        self.record(removed > 0)
    }

    /// Remove every parameter with this name, whatever its value.
    pub fn remove_all(&mut self, name: &str) -> bool {
        let before = self.params.len();
        self.params.retain(|p| p.name() != name);
        let removed = before - self.params.len();
        tracing::debug!("removed all {removed} occurrences of {name}");
        self.record(removed > 0)
    }

    /// Drop all but the last parameter with this name.
    ///
    /// Parameters with other names are not touched and keep their order.
    pub fn dedup_keep_last(&mut self, name: &str) -> bool {
        let Some(last) = self.params.iter().rposition(|p| p.name() == name) else {
            return self.record(false);
        };
        let before = self.params.len();
        let mut idx = 0;
        self.params.retain(|p| {
            let keep = idx == last || p.name() != name;
            idx += 1;
            keep
        });
        let removed = before - self.params.len();
        tracing::debug!("dropped {removed} earlier occurrences of {name}");
        self.record(removed > 0)
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.params.iter();
        if let Some(first) = it.next() {
            write!(f, "{first}")?;
        }
        for p in it {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

impl FromStr for ParameterList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for ParameterList {
    /// Lists are equal when they hold the same parameters in the same
    /// order, regardless of their edit history.
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for ParameterList {}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = ParameterListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Parameter> for ParameterList {
    fn extend<T: IntoIterator<Item = Parameter>>(&mut self, iter: T) {
        for param in iter {
            self.append(param);
        }
    }
}
