use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Database, Error,
    report::{MonthlyTotal, monthly_totals},
};

/// The response body for the monthly totals endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotalsResponse {
    /// The total spent per month, oldest month first.
    pub monthly_expenses: Vec<MonthlyTotal>,
}

/// A route handler for the transaction totals grouped by month.
pub async fn get_monthly_totals_endpoint(
    State(database): State<Database>,
) -> Result<Json<MonthlyTotalsResponse>, Error> {
    let connection = database.acquire()?;

    let monthly_expenses = monthly_totals(&connection)
        .inspect_err(|error| tracing::error!("Could not get monthly totals: {error}"))?;

    Ok(Json(MonthlyTotalsResponse { monthly_expenses }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints,
        report::{MonthlyTotal, monthly_endpoint::MonthlyTotalsResponse},
        test_utils::must_create_test_server,
        transaction::{NewTransaction, create_transaction},
    };

    #[tokio::test]
    async fn no_months_for_empty_database() {
        let (server, _) = must_create_test_server();

        let response = server.get(endpoints::TRANSACTIONS_MONTHLY).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "monthlyExpenses": [] }));
    }

    #[tokio::test]
    async fn totals_grouped_by_month() {
        let (server, database) = must_create_test_server();
        {
            let connection = database.acquire().unwrap();
            for (amount, date) in [
                (30.0, date!(2024 - 02 - 10)),
                (100.0, date!(2024 - 01 - 15)),
                (50.0, date!(2024 - 01 - 20)),
            ] {
                create_transaction(
                    NewTransaction {
                        amount,
                        date,
                        description: "test".to_owned(),
                        category: None,
                    },
                    &connection,
                )
                .unwrap();
            }
        }

        let response = server.get(endpoints::TRANSACTIONS_MONTHLY).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "monthlyExpenses": [
                { "year": 2024, "month": 1, "totalAmount": 150.0 },
                { "year": 2024, "month": 2, "totalAmount": 30.0 },
            ]
        }));
        let body = response.json::<MonthlyTotalsResponse>();
        assert_eq!(
            body.monthly_expenses[0],
            MonthlyTotal {
                year: 2024,
                month: 1,
                total_amount: 150.0,
            }
        );
    }
}
