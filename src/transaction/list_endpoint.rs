use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Database, Error,
    transaction::{Transaction, list_transactions},
};

/// The response body listing every transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// All transactions in the order they were created.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all transactions as JSON.
pub async fn get_transactions_endpoint(
    State(database): State<Database>,
) -> Result<Json<TransactionsResponse>, Error> {
    let connection = database.acquire()?;

    let transactions = list_transactions(&connection)
        .inspect_err(|error| tracing::error!("Could not list transactions: {error}"))?;

    Ok(Json(TransactionsResponse { transactions }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints,
        test_utils::must_create_test_server,
        transaction::{
            Category, NewTransaction, create_transaction, list_endpoint::TransactionsResponse,
        },
    };

    #[tokio::test]
    async fn lists_nothing_for_empty_database() {
        let (server, _) = must_create_test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "transactions": [] }));
    }

    #[tokio::test]
    async fn lists_all_transactions() {
        let (server, database) = must_create_test_server();
        let (first, second) = {
            let connection = database.acquire().unwrap();
            let first = create_transaction(
                NewTransaction {
                    amount: 100.0,
                    date: date!(2024 - 01 - 15),
                    description: "Groceries".to_owned(),
                    category: Some(Category::Food),
                },
                &connection,
            )
            .unwrap();
            let second = create_transaction(
                NewTransaction {
                    amount: 50.0,
                    date: date!(2024 - 01 - 20),
                    description: "Bus".to_owned(),
                    category: None,
                },
                &connection,
            )
            .unwrap();
            (first, second)
        };

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "transactions": [
                {
                    "id": first,
                    "amount": 100.0,
                    "date": "2024-01-15",
                    "description": "Groceries",
                    "category": "Food",
                },
                {
                    "id": second,
                    "amount": 50.0,
                    "date": "2024-01-20",
                    "description": "Bus",
                    "category": null,
                },
            ]
        }));
        let body = response.json::<TransactionsResponse>();
        assert_eq!(body.transactions.len(), 2);
    }
}
