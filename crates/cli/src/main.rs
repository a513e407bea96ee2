//! The main entrypoint for kargs-edit

use anyhow::Result;
use clap::Parser;
use fn_error_context::context;
use kargs_kernel_cmdline::ErrorKind;

mod cli;

/// Exit status when the request itself is invalid.
const EXIT_VALIDATION: u8 = 2;
/// Exit status when the command line could not be parsed.
const EXIT_PARSE: u8 = 3;

#[context("run")]
fn run() -> Result<()> {
    let opts = cli::Opts::parse();

    kargs_utils::initialize_tracing();
    tracing::trace!("starting {}", env!("CARGO_PKG_NAME"));

    let req = cli::load_request(opts)?;
    let outcome = kargs_kernel_cmdline::edit(&req)?;
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

fn exit_status(e: &anyhow::Error) -> u8 {
    let kind = e
        .chain()
        .find_map(|c| c.downcast_ref::<kargs_kernel_cmdline::Error>())
        .map(|e| e.kind());
    match kind {
        Some(ErrorKind::Validation) => EXIT_VALIDATION,
        Some(ErrorKind::Parse) => EXIT_PARSE,
        Some(ErrorKind::BoolArgument) | None => kargs_utils::EXIT_FAILURE,
    }
}

fn main() {
    kargs_utils::run_main(run, exit_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::Context;
    use kargs_kernel_cmdline::{edit, EditRequest};

    #[test]
    fn test_exit_status() {
        let req = EditRequest {
            name: String::new(),
            ..Default::default()
        };
        let e = edit(&req).context("editing").unwrap_err();
        assert_eq!(exit_status(&e), EXIT_VALIDATION);

        let req = EditRequest {
            cmdline: "root='unclosed".into(),
            name: "quiet".into(),
            ..Default::default()
        };
        let e = edit(&req).context("editing").unwrap_err();
        assert_eq!(exit_status(&e), EXIT_PARSE);

        let e = anyhow::anyhow!("something else");
        assert_eq!(exit_status(&e), kargs_utils::EXIT_FAILURE);
    }
}
