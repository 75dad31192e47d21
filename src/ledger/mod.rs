//! The accounting query layer: ledger lines, accounts and the views the dashboard reads.

mod account;
mod core;
mod query;
mod record;

pub use account::{AccountOption, get_account_options};
pub use core::{create_ledger_tables, insert_account, insert_record};
pub use query::{get_general_context, query_account_view, query_atomic_view};
pub use record::{AccountNumber, Cell, Column, GeneralId, Record};

#[cfg(test)]
pub(crate) use query::test_ledger;
