//! Route handlers for the records table, the context table and the exports.

use axum::{
    Json,
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;

use crate::{
    Error,
    ledger::{Column, GeneralId, Record, get_general_context},
    records::{
        load::{RecordsQuery, RecordsState, load_records, no_update_response},
        view::{context_table, records_table},
    },
};

/// Render the records table for the dashboard controls in `query`.
///
/// Responds with no content if the controls do not select anything yet.
pub async fn get_records_table(
    State(state): State<RecordsState>,
    Query(query): Query<RecordsQuery>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match load_records(&query, state.record_limit, &connection) {
        Ok(Some(records)) => records_table(&records).into_response(),
        Ok(None) => no_update_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Render the lines of the journal entry `general_id`.
pub async fn get_general_context_table(
    State(state): State<RecordsState>,
    Path(general_id): Path<GeneralId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match get_general_context(general_id, &connection) {
        Ok(records) => context_table(&records).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Get the records for the dashboard controls in `query` as a JSON array.
pub async fn get_records_json(
    State(state): State<RecordsState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    Ok(match load_records(&query, state.record_limit, &connection)? {
        Some(records) => Json(records).into_response(),
        None => no_update_response(),
    })
}

/// Get the records for the dashboard controls in `query` as a CSV file.
pub async fn get_records_csv(
    State(state): State<RecordsState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let Some(records) = load_records(&query, state.record_limit, &connection)? else {
        return Ok(no_update_response());
    };

    let body = records_to_csv(&records)?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"records.csv\""),
        ],
        body,
    )
        .into_response())
}

/// Write `records` as CSV with a header row of the column IDs.
fn records_to_csv(records: &[Record]) -> Result<String, Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(Column::ALL.map(Column::name))
        .map_err(|error| Error::CsvError(error.to_string()))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|error| Error::CsvError(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}
