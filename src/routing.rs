//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    report::{get_monthly_totals_endpoint, get_summary_endpoint},
    transaction::{
        create_transaction_endpoint, create_transaction_form_endpoint,
        delete_transaction_endpoint, delete_transaction_form_endpoint, edit_transaction_endpoint,
        get_edit_transaction_page, get_transactions_endpoint, update_transaction_form_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint)
                .post(create_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::TRANSACTIONS_MONTHLY,
            get(get_monthly_totals_endpoint),
        )
        .route(
            endpoints::DASHBOARD_TRANSACTIONS,
            post(create_transaction_form_endpoint),
        )
        .route(
            endpoints::DASHBOARD_TRANSACTION,
            put(update_transaction_form_endpoint).delete(delete_transaction_form_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{endpoints, test_utils::must_create_test_server};

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let (server, _) = must_create_test_server();

        let response = server.patch(endpoints::TRANSACTIONS).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn full_transaction_lifecycle() {
        let (server, _) = must_create_test_server();

        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": 12.5,
                "date": "2024-05-01",
                "description": "Lunch",
                "category": "Food",
            }))
            .await;
        created.assert_status_ok();
        let id = created.json::<serde_json::Value>()["insertedId"]
            .as_i64()
            .expect("insertedId should be a number");

        server
            .put(endpoints::TRANSACTIONS)
            .json(&json!({
                "id": id,
                "amount": 15.0,
                "date": "2024-05-02",
                "description": "Dinner",
                "category": "Food",
            }))
            .await
            .assert_json(&json!({ "success": true }));

        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_json(&json!({
                "transactions": [{
                    "id": id,
                    "amount": 15.0,
                    "date": "2024-05-02",
                    "description": "Dinner",
                    "category": "Food",
                }]
            }));

        server
            .delete(endpoints::TRANSACTIONS)
            .json(&json!({ "id": id }))
            .await
            .assert_json(&json!({ "success": true }));

        server
            .get(endpoints::TRANSACTIONS_SUMMARY)
            .await
            .assert_json(&json!({
                "data": {
                    "total": 0.0,
                    "categoryBreakdown": [],
                    "recentTransactions": [],
                }
            }));
    }
}
