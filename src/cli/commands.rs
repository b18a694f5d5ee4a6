//! CLI command implementations
//!
//! Every command builds its catalogues explicitly from configuration, runs,
//! and writes exactly one JSON response.

use std::path::Path;

use serde_json::{json, Value as Json};

use crate::config::Config;
use crate::operators::{Invoker, OperatorRegistry, Outcome};
use crate::schema::SchemaCatalogue;

use super::args::Command;
use super::errors::CliResult;
use super::io::{read_args, write_error, write_inapplicable, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Schemas { config } => schemas(config.as_deref()),
        Command::Operators => operators(),
        Command::Describe { name } => describe(&name),
        Command::Invoke { name, config } => invoke(&name, config.as_deref()),
    }
}

fn load_catalogue(config_path: Option<&Path>) -> CliResult<SchemaCatalogue> {
    let config = Config::load_or_default(config_path)?;
    Ok(config.build_catalogue()?)
}

/// Schema catalogue as a JSON object: name -> field map
pub fn catalogue_json(catalogue: &SchemaCatalogue) -> CliResult<Json> {
    let mut out = serde_json::Map::new();
    for descriptor in catalogue.iter() {
        out.insert(descriptor.name.clone(), serde_json::to_value(&descriptor.fields)?);
    }
    Ok(Json::Object(out))
}

/// Print the schema catalogue
pub fn schemas(config_path: Option<&Path>) -> CliResult<()> {
    let catalogue = load_catalogue(config_path)?;
    write_response(catalogue_json(&catalogue)?)
}

/// Print every operator's discovery record
pub fn operators() -> CliResult<()> {
    let registry = OperatorRegistry::with_builtin_operators()?;
    let infos: Vec<_> = registry.iter().map(|op| op.describe()).collect();
    write_response(serde_json::to_value(infos)?)
}

/// Print one operator's discovery record
pub fn describe(name: &str) -> CliResult<()> {
    let registry = OperatorRegistry::with_builtin_operators()?;
    match registry.get(name) {
        Ok(op) => write_response(serde_json::to_value(op.describe())?),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Apply an operator to arguments read from stdin.
///
/// Inapplicable outcomes and operator errors are responses, not CLI
/// failures.
pub fn invoke(name: &str, config_path: Option<&Path>) -> CliResult<()> {
    let catalogue = load_catalogue(config_path)?;
    let registry = OperatorRegistry::with_builtin_operators()?;
    let args = read_args()?;

    let invoker = Invoker::new(&catalogue, &registry);
    match invoker.invoke(name, &args) {
        Ok(record) => match record.outcome {
            Outcome::Value(value) => write_response(json!({
                "invocation": record.id,
                "rendered": record.rendered,
                "timestamp": record.timestamp,
                "value": value,
            })),
            Outcome::Inapplicable(reason) => write_inapplicable(&reason.to_string()),
        },
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}
