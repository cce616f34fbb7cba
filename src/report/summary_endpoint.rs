use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Database, Error,
    report::{Summary, summary},
};

/// The response body for the summary endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The grand total, category breakdown and recent transactions.
    pub data: Summary,
}

/// A route handler for the grand total, category breakdown and the most
/// recent transactions.
pub async fn get_summary_endpoint(
    State(database): State<Database>,
) -> Result<Json<SummaryResponse>, Error> {
    let connection = database.acquire()?;

    let data = summary(&connection)
        .inspect_err(|error| tracing::error!("Could not get transaction summary: {error}"))?;

    Ok(Json(SummaryResponse { data }))
}
