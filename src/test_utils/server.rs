use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, Database, build_router};

#[track_caller]
pub(crate) fn must_create_test_database() -> Database {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");

    Database::from_connection(connection).expect("could not initialize test DB")
}

/// Create a test server for the full router and return the database behind it
/// so tests can seed and inspect it directly.
#[track_caller]
pub(crate) fn must_create_test_server() -> (TestServer, Database) {
    let database = must_create_test_database();
    let app = build_router(AppState::from_database(database.clone()));
    let server = TestServer::try_new(app).expect("Could not create test server.");

    (server, database)
}
