//! SQLite persistence for transformed flights.
//!
//! The ETL loads into two databases: staging, where each run lands first, and
//! production. Both use the same `flights` schema and are opened through
//! [`open_database`] with an explicit [`DatabaseConfig`].

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use rusqlite::{Connection, Error as SqliteError, Transaction};
use thiserror::Error;

use crate::transform::TransformedFlight;

/// Which database a connection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Landing database for freshly transformed rows.
    Staging,
    /// Database read by downstream consumers.
    Production,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staging => f.write_str("staging"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Locations of the staging and production databases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Staging database file.
    pub staging: Utf8PathBuf,
    /// Production database file.
    pub production: Utf8PathBuf,
}

impl DatabaseConfig {
    /// Create a configuration from the two database paths.
    #[must_use]
    pub fn new(staging: impl Into<Utf8PathBuf>, production: impl Into<Utf8PathBuf>) -> Self {
        Self {
            staging: staging.into(),
            production: production.into(),
        }
    }

    /// Path of the database for `stage`.
    #[must_use]
    pub fn path(&self, stage: Stage) -> &Utf8Path {
        match stage {
            Stage::Staging => &self.staging,
            Stage::Production => &self.production,
        }
    }
}

/// Errors raised by [`open_database`] and [`FlightStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to create the parent directory for the database file.
    #[error("failed to create parent directory for {path:?}")]
    CreateDirectory {
        /// Database path whose parent could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open {stage} database at {path:?}")]
    Open {
        /// Stage being opened.
        stage: Stage,
        /// Database path.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Creating the `flights` table failed.
    #[error("failed to create flights table")]
    CreateSchema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// The connection did not answer a trivial query.
    #[error("{stage} database did not respond")]
    Ping {
        /// Stage being checked.
        stage: Stage,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Beginning the transaction failed.
    #[error("failed to begin flight persistence transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Preparing the insert statement failed.
    #[error("failed to prepare flight insert statement")]
    PrepareInsert {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// A flight duration does not fit an SQLite integer.
    #[error("duration of flight {flight_id} exceeds SQLite i64 range")]
    DurationOutOfRange {
        /// Identifier of the offending flight.
        flight_id: String,
    },
    /// Writing a flight row failed.
    #[error("failed to persist flight {flight_id}")]
    PersistRow {
        /// Identifier of the flight being persisted.
        flight_id: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Committing the transaction failed.
    #[error("failed to commit flight persistence transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Counting rows failed.
    #[error("failed to count flights")]
    Count {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
}

/// Open connection to one stage's database.
#[derive(Debug)]
pub struct FlightStore {
    stage: Stage,
    path: Utf8PathBuf,
    connection: Connection,
}

/// Open the database for `stage`, creating the file and schema if missing.
///
/// # Errors
/// Returns [`StoreError::CreateDirectory`], [`StoreError::Open`] or
/// [`StoreError::CreateSchema`] when the database cannot be prepared.
///
/// # Examples
/// ```no_run
/// use contrail_data::store::{DatabaseConfig, Stage, open_database};
///
/// let config = DatabaseConfig::new("var/staging.sqlite", "var/production.sqlite");
/// let store = open_database(&config, Stage::Staging)?;
/// store.check_connection()?;
/// # Ok::<(), contrail_data::store::StoreError>(())
/// ```
pub fn open_database(config: &DatabaseConfig, stage: Stage) -> Result<FlightStore, StoreError> {
    let path = config.path(stage);
    contrail_fs::ensure_parent_dir(path).map_err(|source| StoreError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    let connection = Connection::open(path.as_std_path()).map_err(|source| StoreError::Open {
        stage,
        path: path.to_path_buf(),
        source,
    })?;
    create_schema(&connection)?;
    debug!("opened {stage} database at {path}");
    Ok(FlightStore {
        stage,
        path: path.to_path_buf(),
        connection,
    })
}

fn create_schema(connection: &Connection) -> Result<(), StoreError> {
    connection
        .execute(
            "CREATE TABLE IF NOT EXISTS flights (
                flight_id TEXT PRIMARY KEY,
                aircraft_type TEXT NOT NULL,
                origin_iata TEXT NOT NULL,
                destination_iata TEXT NOT NULL,
                departed_at INTEGER NOT NULL,
                arrived_at INTEGER NOT NULL,
                duration_secs INTEGER NOT NULL,
                distance_km REAL NOT NULL,
                fuel_gallons REAL NOT NULL
            )",
            [],
        )
        .map(|_| ())
        .map_err(|source| StoreError::CreateSchema { source })
}

impl FlightStore {
    /// Stage this store is connected to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Database file backing this store.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Confirm the connection answers a trivial query.
    ///
    /// # Errors
    /// Returns [`StoreError::Ping`] if `SELECT 1` fails.
    pub fn check_connection(&self) -> Result<(), StoreError> {
        self.connection
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map(|_| ())
            .map_err(|source| StoreError::Ping {
                stage: self.stage,
                source,
            })
    }

    /// Upsert rows keyed by flight id in a single transaction.
    ///
    /// Re-running a batch replaces the earlier rows, so loads are idempotent.
    /// Nothing is written if any row fails.
    ///
    /// # Errors
    /// Returns the [`StoreError`] variant naming the failed step.
    pub fn persist_flights(&mut self, flights: &[TransformedFlight]) -> Result<(), StoreError> {
        let transaction = self
            .connection
            .transaction()
            .map_err(|source| StoreError::BeginTransaction { source })?;
        persist_rows(&transaction, flights)?;
        transaction
            .commit()
            .map_err(|source| StoreError::Commit { source })?;
        info!("persisted {} flights to {} database", flights.len(), self.stage);
        Ok(())
    }

    /// Number of rows in the `flights` table.
    ///
    /// # Errors
    /// Returns [`StoreError::Count`] if the query fails.
    pub fn count_flights(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .connection
            .query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))
            .map_err(|source| StoreError::Count { source })?;
        Ok(count.unsigned_abs())
    }
}

fn persist_rows(
    transaction: &Transaction<'_>,
    flights: &[TransformedFlight],
) -> Result<(), StoreError> {
    if flights.is_empty() {
        return Ok(());
    }

    let mut statement = transaction
        .prepare(
            "INSERT OR REPLACE INTO flights (
                flight_id, aircraft_type, origin_iata, destination_iata,
                departed_at, arrived_at, duration_secs, distance_km, fuel_gallons
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .map_err(|source| StoreError::PrepareInsert { source })?;

    for flight in flights {
        let duration_secs =
            i64::try_from(flight.duration_secs).map_err(|_| StoreError::DurationOutOfRange {
                flight_id: flight.flight_id.clone(),
            })?;
        statement
            .execute((
                &flight.flight_id,
                &flight.aircraft_type,
                &flight.origin_iata,
                &flight.destination_iata,
                flight.departed_at,
                flight.arrived_at,
                duration_secs,
                flight.distance_km,
                flight.fuel_gallons,
            ))
            .map_err(|source| StoreError::PersistRow {
                flight_id: flight.flight_id.clone(),
                source,
            })?;
    }

    Ok(())
}
