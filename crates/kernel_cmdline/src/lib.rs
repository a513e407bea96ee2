//! Kernel command line editing utilities.
//!
//! This crate parses a kernel command line string into an ordered list of
//! parameters, applies edits to it, and renders the result back into a
//! single string that splits back into the same parameters.
//!
//! Parameters are either key-only switches (`quiet`) or key-value pairs
//! (`console=ttyS0`). Values containing whitespace are double quoted.
//!
//! The [`edit`] function is the single entry point for hosts which take
//! a request describing one edit and report back whether anything changed.

mod edit;
mod error;
mod list;
mod parameter;
pub mod tokenize;

pub use edit::{edit, EditOutcome, EditRequest, Operation};
pub use error::{Error, ErrorKind, Result};
pub use list::{ParameterList, ParameterListIter};
pub use parameter::Parameter;
