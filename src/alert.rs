//! Alert messages shown when a dashboard request fails.
//!
//! Alerts are HTML fragments swapped into the `#alert-container` element of
//! the page via htmx's `hx-target-error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

const ERROR_ALERT_STYLE: &str = "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
    dark:bg-gray-800 dark:text-red-400";

/// An error alert with a short message and an optional longer explanation.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div class=(ERROR_ALERT_STYLE) role="alert"
            {
                div class="flex justify-between items-start gap-4"
                {
                    span class="font-medium" { (self.message) }

                    button
                        type="button"
                        aria-label="Close"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }

                @if !self.details.is_empty() {
                    p class="mt-1" { (self.details) }
                }
            }
        )
    }

    /// Render the alert as a response with `status_code`.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}
