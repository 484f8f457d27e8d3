//! Error types emitted by the Contrail CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use contrail_core::CatalogError;
use contrail_data::catalog::ProviderBuildError;
use contrail_data::store::StoreError;
use contrail_data::transform::FlightDecodeError;
use thiserror::Error;

/// Errors emitted by the Contrail CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Both a catalog directory and a catalog endpoint were supplied.
    #[error("--catalog-dir and --catalog-endpoint are mutually exclusive")]
    ConflictingCatalogSources,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but has the wrong type.
    #[error("{field} path {path:?} exists but is not a {expected}")]
    SourcePathWrongType {
        field: &'static str,
        path: Utf8PathBuf,
        expected: &'static str,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Constructing the HTTP catalog provider failed.
    #[error("failed to build catalog provider for {endpoint:?}: {source}")]
    BuildCatalogProvider {
        endpoint: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Loading a reference catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Reading the flight records file failed.
    #[error("failed to read flight records at {path:?}: {source}")]
    ReadFlights {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Flight records JSON could not be decoded.
    #[error("failed to parse flight records at {path:?}: {source}")]
    DecodeFlights {
        path: Utf8PathBuf,
        #[source]
        source: FlightDecodeError,
    },
    /// A database operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Writing the command summary failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
