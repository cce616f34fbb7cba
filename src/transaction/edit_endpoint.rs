use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

use crate::{
    Database, Error,
    transaction::{
        Category, NewTransaction, RequestedId, category::deserialize_optional_category,
        get_transaction, update_transaction,
    },
};

/// The request body for editing a transaction.
#[derive(Debug, Deserialize)]
pub struct EditTransactionRequest {
    id: RequestedId,
    amount: f64,
    date: Date,
    description: String,
    /// `None` when the field is absent, which keeps the stored category.
    #[serde(default, deserialize_with = "deserialize_category_change")]
    category: Option<Option<Category>>,
}

fn deserialize_category_change<'de, D>(
    deserializer: D,
) -> Result<Option<Option<Category>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_category(deserializer).map(Some)
}

/// The response body for update and delete requests.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    /// Whether a transaction with the requested ID was found and changed.
    pub success: bool,
}

/// A route handler for replacing the fields of a transaction.
///
/// An ID that does not match any transaction, including one that is not a
/// valid ID at all, responds with `{"success": false}`, as does an update
/// that would not change any stored value.
///
/// Leaving out `category` keeps the stored category, while `null` or `""`
/// clears it.
pub async fn edit_transaction_endpoint(
    State(database): State<Database>,
    payload: Result<Json<EditTransactionRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, Error> {
    let Json(request) = payload?;
    let transaction = NewTransaction {
        amount: request.amount,
        date: request.date,
        description: request.description,
        category: None,
    };
    // Validate before looking at the ID so bad input is reported even for unknown IDs.
    transaction.validate()?;

    let Some(id) = request.id.parse() else {
        tracing::debug!("Ignoring update for malformed transaction ID {:?}", request.id);
        return Ok(Json(SuccessResponse { success: false }));
    };

    let connection = database.acquire()?;
    let category = match request.category {
        Some(category) => category,
        None => match get_transaction(id, &connection) {
            Ok(stored) => stored.category,
            Err(Error::NotFound) => return Ok(Json(SuccessResponse { success: false })),
            Err(error) => return Err(error),
        },
    };
    let transaction = NewTransaction {
        category,
        ..transaction
    };

    let success = update_transaction(id, transaction, &connection)
        .inspect_err(|error| tracing::error!("Could not update transaction {id}: {error}"))?;

    Ok(Json(SuccessResponse { success }))
}
