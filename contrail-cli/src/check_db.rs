//! Database connectivity check for the Contrail CLI.

use std::fmt;

use camino::Utf8PathBuf;
use clap::Parser;
use contrail_data::store::{DatabaseConfig, Stage, open_database};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PRODUCTION_DB, ARG_STAGING_DB, CliError, ENV_CHECK_PRODUCTION_DB, ENV_CHECK_STAGING_DB,
};

/// CLI arguments for the `check-db` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "check-db",
    about = "Open both databases, create the schema if needed and run a ping query"
)]
#[ortho_config(prefix = "CONTRAIL")]
pub(crate) struct CheckDbArgs {
    /// Staging database file.
    #[arg(long = ARG_STAGING_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) staging_db: Option<Utf8PathBuf>,
    /// Production database file.
    #[arg(long = ARG_PRODUCTION_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) production_db: Option<Utf8PathBuf>,
}

impl CheckDbArgs {
    pub(crate) fn into_config(self) -> Result<DatabaseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DatabaseConfig::try_from(merged)
    }
}

impl TryFrom<CheckDbArgs> for DatabaseConfig {
    type Error = CliError;

    fn try_from(args: CheckDbArgs) -> Result<Self, Self::Error> {
        let staging = args.staging_db.ok_or(CliError::MissingArgument {
            field: ARG_STAGING_DB,
            env: ENV_CHECK_STAGING_DB,
        })?;
        let production = args.production_db.ok_or(CliError::MissingArgument {
            field: ARG_PRODUCTION_DB,
            env: ENV_CHECK_PRODUCTION_DB,
        })?;
        Ok(Self::new(staging, production))
    }
}

/// Result of checking one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatabaseStatus {
    pub(crate) stage: Stage,
    pub(crate) path: Utf8PathBuf,
    pub(crate) flights: u64,
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} database {}: ok ({} flights)",
            self.stage, self.path, self.flights
        )
    }
}

/// Check staging first, then production; stop at the first failure.
pub(crate) fn run_check_db(config: &DatabaseConfig) -> Result<Vec<DatabaseStatus>, CliError> {
    [Stage::Staging, Stage::Production]
        .into_iter()
        .map(|stage| -> Result<DatabaseStatus, CliError> {
            let store = open_database(config, stage)?;
            store.check_connection()?;
            Ok(DatabaseStatus {
                stage,
                path: store.path().to_path_buf(),
                flights: store.count_flights()?,
            })
        })
        .collect()
}
