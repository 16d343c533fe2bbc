//! Core library entry for the `labkit` CLI.
//!
//! labkit scaffolds, validates, restructures, and reports on research
//! project directory layouts. The structure engine (schema registry, type
//! detector, analyzer, scorer, restructure planner) is pure against a
//! captured snapshot; everything that touches the outside world goes
//! through the port traits in [`ports`].
//!
//! Known limitation: operations are single-writer. Two restructures racing
//! on the same project path can corrupt the tree or double-apply moves;
//! nothing here locks against that.

pub mod adapters;
pub mod analyze;
pub mod cli;
pub mod commands;
pub mod context;
pub mod detect;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod restructure;
pub mod schema;
pub mod score;
pub mod tree;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or a result envelope
/// cannot be rendered. Logical operation failures are reported inside the
/// printed envelope, not through this result.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_reports_missing_path_inside_the_envelope() {
        // The operation fails logically, but run() itself succeeds.
        let result = run(["labkit", "validate", "/nonexistent/labkit-test-path"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["labkit", "unknown"]);
        assert!(result.is_err());
    }
}
