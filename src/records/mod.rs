//! The records table: selecting ledger lines with the dashboard controls,
//! showing the journal entry of a selected line, and exporting the selection.

mod handlers;
mod load;
mod view;

pub use handlers::{
    get_general_context_table, get_records_csv, get_records_json, get_records_table,
};
pub use view::{CONTEXT_TABLE_ID, RECORDS_TABLE_ID};
