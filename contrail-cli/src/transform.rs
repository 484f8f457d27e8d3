//! Transform command implementation for the Contrail CLI.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use contrail_core::CatalogProvider;
use contrail_data::catalog::{FsCatalogProvider, HttpCatalogProvider};
use contrail_data::store::{DatabaseConfig, Stage, open_database};
use contrail_data::transform::{decode_flight_records, transform_flights};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG_BUCKET, ARG_CATALOG_DIR, ARG_CATALOG_ENDPOINT, ARG_FLIGHTS, ARG_PRODUCTION_DB,
    ARG_STAGING_DB, CliError, ENV_CATALOG_BUCKET, ENV_CATALOG_DIR, ENV_FLIGHTS,
    ENV_TRANSFORM_PRODUCTION_DB, ENV_TRANSFORM_STAGING_DB,
};

/// Database a transform run loads into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TargetStage {
    #[default]
    Staging,
    Production,
}

impl From<TargetStage> for Stage {
    fn from(value: TargetStage) -> Self {
        match value {
            TargetStage::Staging => Self::Staging,
            TargetStage::Production => Self::Production,
        }
    }
}

/// CLI arguments for the `transform` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "transform",
    long_about = "Resolve origin and destination airports, great-circle \
                 distance and fuel burn for each flight record, then load \
                 the rows into the staging (or production) database. \
                 Catalogs come from a local directory or an object-storage \
                 bucket.",
    about = "Transform flight records and load them into a database"
)]
#[ortho_config(prefix = "CONTRAIL")]
pub(crate) struct TransformArgs {
    /// Directory containing `airports.json` and `aircraft.json`.
    #[arg(long = ARG_CATALOG_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) catalog_dir: Option<Utf8PathBuf>,
    /// Object-storage endpoint serving the catalogs (e.g. "http://localhost:9000").
    #[arg(long = ARG_CATALOG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub(crate) catalog_endpoint: Option<String>,
    /// Bucket holding the catalogs on the endpoint.
    #[arg(long = ARG_CATALOG_BUCKET, value_name = "name")]
    #[serde(default)]
    pub(crate) catalog_bucket: Option<String>,
    /// JSON file holding an array of flight records.
    #[arg(long = ARG_FLIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) flights: Option<Utf8PathBuf>,
    /// Staging database file.
    #[arg(long = ARG_STAGING_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) staging_db: Option<Utf8PathBuf>,
    /// Production database file.
    #[arg(long = ARG_PRODUCTION_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) production_db: Option<Utf8PathBuf>,
    /// Database to load into.
    #[arg(long, value_enum, value_name = "stage")]
    #[serde(default)]
    pub(crate) stage: Option<TargetStage>,
}

impl TransformArgs {
    pub(crate) fn into_config(self) -> Result<TransformConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TransformConfig::try_from(merged)
    }
}

/// Where the reference catalogs are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    Directory(Utf8PathBuf),
    Bucket { endpoint: String, bucket: String },
}

/// Resolved `transform` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransformConfig {
    pub(crate) catalogs: CatalogSource,
    pub(crate) flights: Utf8PathBuf,
    pub(crate) databases: DatabaseConfig,
    pub(crate) stage: Stage,
}

impl TransformConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.flights, ARG_FLIGHTS)?;
        if let CatalogSource::Directory(dir) = &self.catalogs {
            require_directory(dir, ARG_CATALOG_DIR)?;
        }
        Ok(())
    }

    fn catalog_provider(&self) -> Result<Box<dyn CatalogProvider>, CliError> {
        match &self.catalogs {
            CatalogSource::Directory(dir) => Ok(Box::new(FsCatalogProvider::new(dir.clone()))),
            CatalogSource::Bucket { endpoint, bucket } => {
                let provider = HttpCatalogProvider::new(endpoint.clone(), bucket.clone())
                    .map_err(|source| CliError::BuildCatalogProvider {
                        endpoint: endpoint.clone(),
                        source,
                    })?;
                Ok(Box::new(provider))
            }
        }
    }
}

pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match contrail_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) if matches!(contrail_fs::is_directory(path), Ok(true)) => {
            Err(CliError::SourcePathWrongType {
                field,
                path: path.to_path_buf(),
                expected: "file",
            })
        }
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn require_directory(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match contrail_fs::is_directory(path) {
        Ok(true) => Ok(()),
        Ok(false) if matches!(contrail_fs::is_regular_file(path), Ok(true)) => {
            Err(CliError::SourcePathWrongType {
                field,
                path: path.to_path_buf(),
                expected: "directory",
            })
        }
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<TransformArgs> for TransformConfig {
    type Error = CliError;

    fn try_from(args: TransformArgs) -> Result<Self, Self::Error> {
        let catalogs = match (args.catalog_dir, args.catalog_endpoint) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingCatalogSources),
            (Some(dir), None) => CatalogSource::Directory(dir),
            (None, Some(endpoint)) => {
                let bucket = args.catalog_bucket.ok_or(CliError::MissingArgument {
                    field: ARG_CATALOG_BUCKET,
                    env: ENV_CATALOG_BUCKET,
                })?;
                CatalogSource::Bucket { endpoint, bucket }
            }
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_CATALOG_DIR,
                    env: ENV_CATALOG_DIR,
                });
            }
        };
        let flights = args.flights.ok_or(CliError::MissingArgument {
            field: ARG_FLIGHTS,
            env: ENV_FLIGHTS,
        })?;
        let staging = args.staging_db.ok_or(CliError::MissingArgument {
            field: ARG_STAGING_DB,
            env: ENV_TRANSFORM_STAGING_DB,
        })?;
        let production = args.production_db.ok_or(CliError::MissingArgument {
            field: ARG_PRODUCTION_DB,
            env: ENV_TRANSFORM_PRODUCTION_DB,
        })?;
        Ok(Self {
            catalogs,
            flights,
            databases: DatabaseConfig::new(staging, production),
            stage: args.stage.unwrap_or_default().into(),
        })
    }
}

/// Counts reported once a transform run completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransformSummary {
    pub(crate) loaded: usize,
    pub(crate) rejected: usize,
    pub(crate) stage: Stage,
    pub(crate) database: Utf8PathBuf,
}

impl fmt::Display for TransformSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loaded {} flights into {} database {} ({} rejected)",
            self.loaded, self.stage, self.database, self.rejected
        )
    }
}

/// Load catalogs, transform the flight file and persist the accepted rows.
pub(crate) fn run_transform(config: &TransformConfig) -> Result<TransformSummary, CliError> {
    config.validate_sources()?;
    let provider = config.catalog_provider()?;
    let airports = provider.load_airport_catalog()?;
    let aircraft = provider.load_aircraft_catalog()?;

    let contents =
        contrail_fs::read_utf8_file(&config.flights).map_err(|source| CliError::ReadFlights {
            path: config.flights.clone(),
            source,
        })?;
    let records =
        decode_flight_records(contents.as_bytes()).map_err(|source| CliError::DecodeFlights {
            path: config.flights.clone(),
            source,
        })?;

    let report = transform_flights(&records, &airports, &aircraft);
    let mut store = open_database(&config.databases, config.stage)?;
    store.persist_flights(&report.flights)?;

    Ok(TransformSummary {
        loaded: report.flights.len(),
        rejected: report.rejected.len(),
        stage: config.stage,
        database: store.path().to_path_buf(),
    })
}
