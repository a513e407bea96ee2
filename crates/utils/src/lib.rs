//! The inevitable catchall "utils" crate. Generally only add
//! things here that are shared by entrypoints and only depend
//! on "core" crates.
//!
mod tracing_util;
pub use tracing_util::*;

/// Exit status for failures that don't map to anything more specific.
pub const EXIT_FAILURE: u8 = 1;

/// Intended for use in `main`, calls an inner function and
/// handles errors by printing them.
///
/// The process exit status is picked by `exit_status`, so that
/// callers can tell different classes of failure apart.
pub fn run_main<F, S>(f: F, exit_status: S)
where
    F: FnOnce() -> anyhow::Result<()>,
    S: FnOnce(&anyhow::Error) -> u8,
{
    use std::io::Write as _;

    use owo_colors::OwoColorize;

    if let Err(e) = f() {
        let mut stderr = anstream::stderr();
        // Don't panic if writing fails.
        let _ = writeln!(stderr, "{}{:#}", "error: ".red(), e);
        std::process::exit(exit_status(&e).into());
    }
}
