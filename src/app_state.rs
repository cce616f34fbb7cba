//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{Database, Error};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The shared handle to the application database.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] backed by the SQLite database at `database_path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new(database_path: &str) -> Result<Self, Error> {
        Ok(Self {
            database: Database::connect(database_path)?,
        })
    }

    /// Create a new [AppState] from an existing database handle.
    pub fn from_database(database: Database) -> Self {
        Self { database }
    }
}

// this impl lets handlers extract the database handle directly
impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
