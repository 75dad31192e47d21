//! Read queries over the ledger: the account view, the atomic view and the journal entry context.

use rusqlite::{Connection, params};

use crate::{
    Error,
    date_range::DateRange,
    ledger::{
        core::{RECORD_COLUMNS, map_record_row},
        record::{AccountNumber, GeneralId, Record},
    },
};

/// SQLite treats a negative limit as no limit.
const NO_LIMIT: i64 = -1;

fn limit_param(limit: Option<u32>) -> i64 {
    limit.map(i64::from).unwrap_or(NO_LIMIT)
}

/// Get the lines booked on `account`, restricted to `range` if one is given.
///
/// Lines are ordered by date, then journal entry, then insertion order.
/// At most `limit` lines are returned, or all of them if `limit` is `None`.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn query_account_view(
    account: AccountNumber,
    range: Option<DateRange>,
    limit: Option<u32>,
    connection: &Connection,
) -> Result<Vec<Record>, Error> {
    let limit = limit_param(limit);

    match range {
        Some(range) => connection
            .prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM entry \
                WHERE account = ?1 AND date BETWEEN ?2 AND ?3 \
                ORDER BY date ASC, general ASC, id ASC LIMIT ?4"
            ))?
            .query_map(
                params![account, range.start, range.end, limit],
                map_record_row,
            )?
            .map(|record_result| record_result.map_err(Error::from))
            .collect(),
        None => connection
            .prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM entry \
                WHERE account = ?1 \
                ORDER BY date ASC, general ASC, id ASC LIMIT ?2"
            ))?
            .query_map(params![account, limit], map_record_row)?
            .map(|record_result| record_result.map_err(Error::from))
            .collect(),
    }
}

/// Get all lines booked within `range`, regardless of account.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn query_atomic_view(
    range: DateRange,
    limit: Option<u32>,
    connection: &Connection,
) -> Result<Vec<Record>, Error> {
    connection
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM entry \
            WHERE date BETWEEN ?1 AND ?2 \
            ORDER BY date ASC, general ASC, id ASC LIMIT ?3"
        ))?
        .query_map(
            params![range.start, range.end, limit_param(limit)],
            map_record_row,
        )?
        .map(|record_result| record_result.map_err(Error::from))
        .collect()
}

/// Get every line of the journal entry `general`.
///
/// An unknown `general` gives an empty list.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn get_general_context(
    general: GeneralId,
    connection: &Connection,
) -> Result<Vec<Record>, Error> {
    connection
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM entry WHERE general = ?1 ORDER BY id ASC"
        ))?
        .query_map([general], map_record_row)?
        .map(|record_result| record_result.map_err(Error::from))
        .collect()
}
