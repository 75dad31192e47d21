/*! Sets up the application's database. */

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, ledger::create_ledger_tables};

/// Create the tables the dashboard reads from, if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_ledger_tables(&transaction)?;

    transaction.commit()?;

    Ok(())
}
