//! CLI module
//!
//! Provides command-line access to the catalogues:
//! - schemas: print the widget schema catalogue
//! - operators: list operator discovery records
//! - describe: show one operator
//! - invoke: apply an operator to JSON arguments from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{catalogue_json, describe, invoke, operators, run, run_command, schemas};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_args, read_args, write_error, write_inapplicable, write_response};
