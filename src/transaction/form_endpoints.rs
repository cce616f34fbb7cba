//! Route handlers for the dashboard's transaction forms.
//!
//! These respond with an `HX-Redirect` back to the dashboard on success so
//! the list and charts are redrawn, or with an alert fragment that htmx swaps
//! into the alert container on failure.

use axum::{
    extract::{Path, State},
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, FormRejection};

use crate::{
    Database, Error, endpoints,
    transaction::{
        TransactionId, create_transaction, delete_transaction, form::TransactionForm,
        get_transaction, update_transaction,
    },
};

/// The htmx response header that makes the browser load another page.
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

fn redirect_to_dashboard() -> Response {
    ([(HX_REDIRECT, endpoints::ROOT)], StatusCode::SEE_OTHER).into_response()
}

fn form_rejection_response(rejection: FormRejection) -> Response {
    tracing::debug!("Rejected transaction form: {rejection}");
    Error::InvalidInput(rejection.to_string()).into_alert_response()
}

/// A route handler for creating a transaction from the dashboard form.
pub async fn create_transaction_form_endpoint(
    State(database): State<Database>,
    form: Result<Form<TransactionForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return form_rejection_response(rejection),
    };

    let transaction = match form.into_new_transaction() {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match database.acquire() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = create_transaction(transaction, &connection) {
        tracing::error!("Could not create transaction: {error}");
        return error.into_alert_response();
    }

    redirect_to_dashboard()
}

/// A route handler for saving the edit transaction form.
///
/// Saving the form without changing anything is not an error.
pub async fn update_transaction_form_endpoint(
    State(database): State<Database>,
    Path(transaction_id): Path<TransactionId>,
    form: Result<Form<TransactionForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return form_rejection_response(rejection),
    };

    let transaction = match form.into_new_transaction() {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(),
    };

    let connection = match database.acquire() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = get_transaction(transaction_id, &connection) {
        return error.into_alert_response();
    }

    if let Err(error) = update_transaction(transaction_id, transaction, &connection) {
        tracing::error!("Could not update transaction {transaction_id}: {error}");
        return error.into_alert_response();
    }

    redirect_to_dashboard()
}

/// A route handler for the delete buttons on the dashboard.
pub async fn delete_transaction_form_endpoint(
    State(database): State<Database>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let connection = match database.acquire() {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match delete_transaction(transaction_id, &connection) {
        Ok(true) => redirect_to_dashboard(),
        Ok(false) => Error::NotFound.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::{Path, State},
        http::{Response, StatusCode},
    };
    use axum_extra::extract::Form;
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        Error, endpoints,
        test_utils::{must_create_test_database, must_create_test_server, parse_html_fragment},
        transaction::{
            Category, NewTransaction, Transaction, count_transactions, create_transaction,
            form::TransactionForm,
            form_endpoints::{
                HX_REDIRECT, create_transaction_form_endpoint, delete_transaction_form_endpoint,
                update_transaction_form_endpoint,
            },
            get_transaction,
        },
    };

    fn lunch_form() -> TransactionForm {
        TransactionForm {
            amount: 12.5,
            date: date!(2024 - 03 - 01),
            description: "Lunch".to_owned(),
            category: Some(Category::Food),
        }
    }

    fn groceries() -> NewTransaction {
        NewTransaction {
            amount: 100.0,
            date: date!(2024 - 01 - 15),
            description: "Groceries".to_owned(),
            category: Some(Category::Food),
        }
    }

    #[track_caller]
    fn assert_redirects_to_dashboard(response: &Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location,
            endpoints::ROOT,
            "got redirect to {location:?}, want redirect to {}",
            endpoints::ROOT
        );
    }

    async fn assert_alert(response: Response<Body>, want_status: StatusCode) {
        assert_eq!(response.status(), want_status);
        assert!(response.headers().get(HX_REDIRECT).is_none());

        let fragment = parse_html_fragment(response).await;
        let alert = Selector::parse("[role=alert]").unwrap();
        assert_eq!(fragment.select(&alert).count(), 1, "expected an alert");
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let database = must_create_test_database();

        let response =
            create_transaction_form_endpoint(State(database.clone()), Ok(Form(lunch_form())))
                .await;

        assert_redirects_to_dashboard(&response);
        let connection = database.acquire().unwrap();
        let transaction = get_transaction(1, &connection).unwrap();
        assert_eq!(
            transaction,
            Transaction {
                id: 1,
                amount: 12.5,
                date: date!(2024 - 03 - 01),
                description: "Lunch".to_owned(),
                category: Some(Category::Food),
            }
        );
    }

    #[tokio::test]
    async fn create_rejects_short_description_with_alert() {
        let database = must_create_test_database();
        let form = TransactionForm {
            description: "ab".to_owned(),
            ..lunch_form()
        };

        let response =
            create_transaction_form_endpoint(State(database.clone()), Ok(Form(form))).await;

        assert_alert(response, StatusCode::BAD_REQUEST).await;
        assert_eq!(count_transactions(&database.acquire().unwrap()), Ok(0));
    }

    #[tokio::test]
    async fn create_accepts_url_encoded_form_without_category() {
        let (server, database) = must_create_test_server();

        let response = server
            .post(endpoints::DASHBOARD_TRANSACTIONS)
            .form(&[
                ("amount", "7.25"),
                ("date", "2024-04-02"),
                ("description", "Coffee beans"),
                ("category", ""),
            ])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(HX_REDIRECT), endpoints::ROOT);
        let transaction = get_transaction(1, &database.acquire().unwrap()).unwrap();
        assert_eq!(transaction.category, None);
        assert_eq!(transaction.amount, 7.25);
    }

    #[tokio::test]
    async fn malformed_form_gets_alert() {
        let (server, database) = must_create_test_server();

        let response = server
            .post(endpoints::DASHBOARD_TRANSACTIONS)
            .form(&[
                ("amount", "7.25"),
                ("date", "not a date"),
                ("description", "Coffee beans"),
            ])
            .expect_failure()
            .await;

        response.assert_status_bad_request();
        assert!(response.text().contains("role=\"alert\""));
        assert_eq!(count_transactions(&database.acquire().unwrap()), Ok(0));
    }

    #[tokio::test]
    async fn can_update_transaction() {
        let database = must_create_test_database();
        let id = create_transaction(groceries(), &database.acquire().unwrap()).unwrap();

        let response = update_transaction_form_endpoint(
            State(database.clone()),
            Path(id),
            Ok(Form(TransactionForm {
                category: None,
                ..lunch_form()
            })),
        )
        .await;

        assert_redirects_to_dashboard(&response);
        let transaction = get_transaction(id, &database.acquire().unwrap()).unwrap();
        assert_eq!(transaction.description, "Lunch");
        assert_eq!(transaction.amount, 12.5);
        assert_eq!(transaction.category, None);
    }

    #[tokio::test]
    async fn saving_unchanged_form_redirects() {
        let database = must_create_test_database();
        let id = create_transaction(groceries(), &database.acquire().unwrap()).unwrap();
        let unchanged = TransactionForm {
            amount: 100.0,
            date: date!(2024 - 01 - 15),
            description: "Groceries".to_owned(),
            category: Some(Category::Food),
        };

        let response =
            update_transaction_form_endpoint(State(database), Path(id), Ok(Form(unchanged))).await;

        assert_redirects_to_dashboard(&response);
    }

    #[tokio::test]
    async fn update_missing_transaction_gets_not_found_alert() {
        let database = must_create_test_database();

        let response =
            update_transaction_form_endpoint(State(database), Path(42), Ok(Form(lunch_form())))
                .await;

        assert_alert(response, StatusCode::NOT_FOUND).await;
    }

    #[tokio::test]
    async fn can_delete_transaction() {
        let database = must_create_test_database();
        let id = create_transaction(groceries(), &database.acquire().unwrap()).unwrap();

        let response = delete_transaction_form_endpoint(State(database.clone()), Path(id)).await;

        assert_redirects_to_dashboard(&response);
        assert_eq!(
            get_transaction(id, &database.acquire().unwrap()),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn delete_missing_transaction_gets_not_found_alert() {
        let database = must_create_test_database();

        let response = delete_transaction_form_endpoint(State(database), Path(42)).await;

        assert_alert(response, StatusCode::NOT_FOUND).await;
    }
}
