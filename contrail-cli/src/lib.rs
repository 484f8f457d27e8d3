//! Command-line interface for the Contrail trip ETL.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::{self, Write};

mod check_db;
mod error;
mod transform;

pub use error::CliError;

use check_db::{CheckDbArgs, run_check_db};
use transform::{TransformArgs, run_transform};

const ARG_CATALOG_DIR: &str = "catalog-dir";
const ARG_CATALOG_ENDPOINT: &str = "catalog-endpoint";
const ARG_CATALOG_BUCKET: &str = "catalog-bucket";
const ARG_FLIGHTS: &str = "flights";
const ARG_STAGING_DB: &str = "staging-db";
const ARG_PRODUCTION_DB: &str = "production-db";
const ENV_CATALOG_DIR: &str = "CONTRAIL_CMDS_TRANSFORM_CATALOG_DIR";
const ENV_CATALOG_BUCKET: &str = "CONTRAIL_CMDS_TRANSFORM_CATALOG_BUCKET";
const ENV_FLIGHTS: &str = "CONTRAIL_CMDS_TRANSFORM_FLIGHTS";
const ENV_TRANSFORM_STAGING_DB: &str = "CONTRAIL_CMDS_TRANSFORM_STAGING_DB";
const ENV_TRANSFORM_PRODUCTION_DB: &str = "CONTRAIL_CMDS_TRANSFORM_PRODUCTION_DB";
const ENV_CHECK_STAGING_DB: &str = "CONTRAIL_CMDS_CHECK_DB_STAGING_DB";
const ENV_CHECK_PRODUCTION_DB: &str = "CONTRAIL_CMDS_CHECK_DB_PRODUCTION_DB";

/// Run the Contrail CLI with the current process arguments and environment.
///
/// Command summaries are written to standard output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &mut out)
}

fn dispatch(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Transform(args) => {
            let config = args.into_config()?;
            let summary = run_transform(&config)?;
            writeln!(out, "{summary}").map_err(CliError::WriteOutput)?;
        }
        Command::CheckDb(args) => {
            let config = args.into_config()?;
            for status in run_check_db(&config)? {
                writeln!(out, "{status}").map_err(CliError::WriteOutput)?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "contrail",
    about = "Enrich tracked flights with airports, distance and fuel estimates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transform a batch of flight records and load them into a database.
    Transform(TransformArgs),
    /// Confirm the staging and production databases are reachable.
    CheckDb(CheckDbArgs),
}

#[cfg(test)]
mod tests;
