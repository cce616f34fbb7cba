//! A small personal finance tracker.
//!
//! Transactions (an amount, a date, a description and an optional category)
//! are stored in SQLite and exposed through a JSON API for creating, listing,
//! editing and deleting them, plus a couple of read-only reports: monthly
//! totals and a summary with the grand total, a per-category breakdown and the
//! most recent transactions. A server-rendered dashboard presents the same
//! data as charts and tables, with htmx forms for adding, editing and
//! deleting transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

use crate::alert::Alert;

mod alert;
mod app_state;
mod config;
mod dashboard;
mod db;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod report;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{DATABASE_PATH_ENV, read_database_path};
pub use db::{Database, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use report::{
    CategoryTotal, MonthlyTotal, RECENT_TRANSACTION_COUNT, Summary, category_breakdown,
    grand_total, monthly_totals, recent_transactions, summary,
};
pub use routing::build_router;
pub use transaction::{
    Category, NewTransaction, RequestedId, Transaction, TransactionId, count_transactions,
    create_transaction, delete_transaction, get_transaction, list_transactions,
    update_transaction,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client sent a request body that could not be parsed or that
    /// failed validation, e.g. a blank description or a date that is not a
    /// calendar date.
    ///
    /// The string describes the problem and is safe to show to the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The database could not be reached, e.g. the file could not be opened
    /// or the connection lock was poisoned by a panicking thread.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("the database is unavailable: {0}")]
    StorageUnavailable(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A required configuration value was not provided.
    #[error("the configuration value {0} is missing")]
    MissingConfig(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidInput(reason) => (StatusCode::BAD_REQUEST, reason),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested resource could not be found.".to_owned(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl Error {
    /// Render the error as an alert for the dashboard's htmx requests.
    ///
    /// Like [IntoResponse], internal errors are logged and shown to the user
    /// only as a generic message.
    pub(crate) fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidInput(reason) => Alert::error("Invalid transaction", &reason)
                .into_response(StatusCode::BAD_REQUEST),
            Error::NotFound => Alert::error(
                "Transaction not found",
                "Try refreshing the page to see if the transaction has already been deleted.",
            )
            .into_response(StatusCode::NOT_FOUND),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred. Try again later or check the server logs.",
                )
                .into_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
