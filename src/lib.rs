//! cctable is a web frontend for visualizing accounting records.
//!
//! This library serves a dashboard with a date-range picker, an account
//! multiselect and a table of ledger lines that can be narrowed down with a
//! filter query, e.g. `{date} datestartswith 2017-08 && {amount} >= 100`.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use time::Date;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod date_range;
mod db;
mod endpoints;
mod filter;
mod html;
mod internal_server_error;
mod ledger;
mod logging;
mod not_found;
mod records;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use date_range::{DatePickerConfig, DateRange, parse_date_range};
pub use db::initialize as initialize_db;
pub use filter::{FilterPart, FilterValue, Operator, filter_table, split_filter_part};
pub use ledger::{AccountNumber, Cell, Column, GeneralId, Record, insert_account, insert_record};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date from the date-range picker could not be parsed.
    ///
    /// Callers should pass in the text that failed to parse.
    #[error("could not parse the date \"{0}\", expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The start of a date range is after its end.
    #[error("the start date {start} is after the end date {end}")]
    InvalidDateRange {
        /// The start of the range.
        start: Date,
        /// The end of the range.
        end: Date,
    },

    /// The account number is already used by another account.
    #[error("the account {0} already exists in the database")]
    DuplicateAccount(AccountNumber),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Records could not be written as CSV.
    #[error("could not write records as CSV: {0}")]
    CsvError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidDate(_) | Error::InvalidDateRange { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidDate(text) => Alert::error(
                "Invalid date",
                &format!("Could not read the date \"{text}\". Pick the date again."),
            )
            .into_response_with_status(StatusCode::BAD_REQUEST),
            Error::InvalidDateRange { start, end } => Alert::error(
                "Invalid date range",
                &format!(
                    "The start date {start} is after the end date {end}. \
                    Pick a start date on or before the end date."
                ),
            )
            .into_response_with_status(StatusCode::BAD_REQUEST),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use time::macros::date;

    use crate::Error;

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }

    #[test]
    fn date_errors_are_bad_requests() {
        let invalid_range = || Error::InvalidDateRange {
            start: date!(2017 - 09 - 01),
            end: date!(2017 - 08 - 01),
        };

        assert_eq!(
            invalid_range().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            invalid_range().into_alert_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::InvalidDate("x".to_owned())
                .into_alert_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn lock_error_is_internal_server_error() {
        assert_eq!(
            Error::DatabaseLockError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::DatabaseLockError.into_alert_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_renders_404() {
        assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
