use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Database, Error,
    transaction::{NewTransaction, TransactionId, create_transaction},
};

/// The response body for a successfully created transaction.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionResponse {
    /// Always `true`, failures are reported with an error status instead.
    pub success: bool,
    /// The ID the database assigned to the new transaction.
    pub inserted_id: TransactionId,
}

/// A route handler for creating a new transaction from a JSON body.
///
/// Responds with 400 Bad Request if the body is not a valid transaction.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<Json<CreateTransactionResponse>, Error> {
    let Json(new_transaction) = payload?;
    let connection = database.acquire()?;

    let inserted_id = create_transaction(new_transaction, &connection)
        .inspect_err(|error| tracing::error!("Could not create transaction: {error}"))?;

    Ok(Json(CreateTransactionResponse {
        success: true,
        inserted_id,
    }))
}
