//! The SQLite tables backing the ledger and functions for writing to them.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    ledger::record::{AccountNumber, Record},
};

/// Create the account and entry tables if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_ledger_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS account (
            number INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS entry (
            id INTEGER PRIMARY KEY,
            general INTEGER NOT NULL,
            account INTEGER NOT NULL,
            text TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            relations TEXT NOT NULL DEFAULT '',
            FOREIGN KEY(account) REFERENCES account(number) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_entry_date ON entry(date);
        CREATE INDEX IF NOT EXISTS idx_entry_account_date ON entry(account, date);
        CREATE INDEX IF NOT EXISTS idx_entry_general ON entry(general);",
    )
}

/// Add an account to the chart of accounts.
///
/// # Errors
/// Returns [Error::DuplicateAccount] if `number` is already taken, or
/// [Error::SqlError] for other SQL errors.
pub fn insert_account(
    number: AccountNumber,
    name: &str,
    connection: &Connection,
) -> Result<(), Error> {
    connection
        .execute(
            "INSERT INTO account (number, name) VALUES (?1, ?2)",
            (number, name),
        )
        .map_err(|error| match error {
            // Code 1555 occurs when a PRIMARY KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 1555 => {
                Error::DuplicateAccount(number)
            }
            error => error.into(),
        })?;

    Ok(())
}

/// Add a ledger line and return its row ID.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn insert_record(record: &Record, connection: &Connection) -> Result<i64, Error> {
    connection.execute(
        "INSERT INTO entry (general, account, text, amount, date, relations)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            record.general,
            record.account,
            &record.text,
            record.amount,
            record.date,
            &record.relations,
        ),
    )?;

    Ok(connection.last_insert_rowid())
}

/// The column list expected by [map_record_row].
pub(crate) const RECORD_COLUMNS: &str = "account, text, amount, date, relations, general";

/// Map a row selected with [RECORD_COLUMNS] to a [Record].
pub(crate) fn map_record_row(row: &Row) -> Result<Record, rusqlite::Error> {
    Ok(Record {
        account: row.get(0)?,
        text: row.get(1)?,
        amount: row.get(2)?,
        date: row.get(3)?,
        relations: row.get(4)?,
        general: row.get(5)?,
    })
}
