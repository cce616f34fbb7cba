//! The fallback route handler for unknown paths.

use axum::response::{IntoResponse, Response};

use crate::Error;

/// Respond with a 404 Not Found JSON error.
pub async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test_utils::must_create_test_server;

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _) = must_create_test_server();

        let response = server.get("/api/finance").expect_failure().await;

        response.assert_status_not_found();
        response.assert_json(&json!({
            "error": "The requested resource could not be found."
        }));
    }
}
