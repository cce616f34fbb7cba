//! The storage connector: owns the one SQLite connection shared by every
//! request handler.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, transaction::create_transaction_table};

/// A handle to the application database.
///
/// Construct it once per process with [Database::connect] and clone the
/// handle wherever it is needed; every clone refers to the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    connection: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the SQLite database at `path` and make sure its tables exist.
    ///
    /// `path` may be `":memory:"` for a throwaway database.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the database cannot be opened,
    /// or an [Error::SqlError] if the tables cannot be created.
    pub fn connect(path: &str) -> Result<Self, Error> {
        let connection = Connection::open(path)
            .inspect_err(|error| tracing::error!("Failed to connect to database {path}: {error}"))
            .map_err(|error| Error::StorageUnavailable(error.to_string()))?;

        let database = Self::from_connection(connection)?;
        tracing::info!("Connected to database {path}");

        Ok(database)
    }

    /// Wrap an already open connection, creating the tables if needed.
    ///
    /// # Errors
    /// Returns an error if the tables cannot be created.
    pub fn from_connection(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Get exclusive access to the shared connection for the duration of one
    /// operation.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if another thread panicked while
    /// holding the connection.
    pub fn acquire(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|error| Error::StorageUnavailable(error.to_string()))
    }
}

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
