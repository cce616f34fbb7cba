//! Error alerts shown in the dashboard's alert container.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message for the user with a hint on what to do about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert<'a> {
    /// A short summary of what went wrong.
    pub message: &'a str,
    /// More detail, e.g. how to fix the problem. May be empty.
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert.
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    /// Render the alert as an HTML fragment.
    pub fn view(&self) -> Markup {
        html!(
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 rounded-lg text-red-800 bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400 shadow"
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="text-sm" { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        )
    }

    /// Respond with the alert fragment and `status`.
    pub fn into_response(self, status: StatusCode) -> Response {
        (status, self.view()).into_response()
    }
}
