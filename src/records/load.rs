//! Selects the records shown in the records table from the dashboard controls.

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    date_range::parse_date_range,
    filter::filter_table,
    ledger::{AccountNumber, Record, query_account_view, query_atomic_view},
};

/// The state needed by the records route handlers.
#[derive(Debug, Clone)]
pub struct RecordsState {
    /// The maximum number of records for a date range without accounts.
    pub record_limit: Option<u32>,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecordsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_limit: state.record_limit,
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The values of the dashboard controls.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RecordsQuery {
    /// The accounts selected in the account multiselect.
    #[serde(default)]
    pub accounts: Vec<AccountNumber>,
    /// The start of the date range, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// The end of the date range, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Expressions for narrowing down the records, see [crate::filter].
    #[serde(default)]
    pub filter_query: String,
}

/// Get the records selected by `query`, sorted by journal entry.
///
/// If accounts are selected, the lines of each account are concatenated in
/// the order the accounts were given, restricted to the date range if both
/// dates are given. Without accounts, all lines in the date range are
/// returned, at most `record_limit` of them. The result is then sorted by
/// journal entry, keeping the query order within an entry, and filtered
/// with the filter query.
///
/// Returns `Ok(None)` if neither accounts nor a full date range are given,
/// in which case the table should keep showing what it shows.
///
/// # Errors
/// Returns an error if the dates are invalid or there is an SQL error.
pub(crate) fn load_records(
    query: &RecordsQuery,
    record_limit: Option<u32>,
    connection: &Connection,
) -> Result<Option<Vec<Record>>, Error> {
    let range = parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())?;

    let mut records = if !query.accounts.is_empty() {
        let mut records = Vec::new();

        for &account in &query.accounts {
            records.extend(query_account_view(account, range, None, connection)?);
        }

        records
    } else if let Some(range) = range {
        query_atomic_view(range, record_limit, connection)?
    } else {
        tracing::debug!("no accounts or date range selected, keeping the current table");
        return Ok(None);
    };

    records.sort_by_key(|record| record.general);

    Ok(Some(filter_table(records, &query.filter_query)))
}

/// The response telling htmx to leave the target untouched.
pub(crate) fn no_update_response() -> Response {
    (StatusCode::NO_CONTENT, HxReswap(SwapOption::None), ()).into_response()
}
