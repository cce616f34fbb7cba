use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;

use crate::{
    Database, Error,
    transaction::{RequestedId, delete_transaction, edit_endpoint::SuccessResponse},
};

/// The request body for deleting a transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionRequest {
    id: RequestedId,
}

/// A route handler for deleting a transaction.
///
/// The body is parsed as JSON whatever its `Content-Type`, since browsers
/// send a bare `fetch` body as `text/plain`.
///
/// Deleting a transaction that does not exist, or was already deleted, is not
/// an error and responds with `{"success": false}`, so repeating a delete is
/// harmless.
pub async fn delete_transaction_endpoint(
    State(database): State<Database>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, Error> {
    let request: DeleteTransactionRequest = serde_json::from_slice(&body)
        .map_err(|error| Error::InvalidInput(format!("invalid delete request: {error}")))?;

    let Some(id) = request.id.parse() else {
        tracing::debug!("Ignoring delete for malformed transaction ID {:?}", request.id);
        return Ok(Json(SuccessResponse { success: false }));
    };

    let connection = database.acquire()?;
    let success = delete_transaction(id, &connection)
        .inspect_err(|error| tracing::error!("Could not delete transaction {id}: {error}"))?;

    Ok(Json(SuccessResponse { success }))
}
