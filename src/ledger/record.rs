//! The ledger line shown in the records table and the columns the filter language can address.

use std::fmt::Display;

use serde::{Serialize, Serializer};
use time::Date;

/// The ID of the journal entry (booking) that a ledger line belongs to.
pub type GeneralId = i64;

/// The number of an account in the chart of accounts, e.g. 1200.
pub type AccountNumber = i64;

/// A single line of a journal entry.
///
/// The field order is the column order used by the records table and the exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// The account the amount was booked on.
    pub account: AccountNumber,
    /// The booking text.
    pub text: String,
    /// The booked amount.
    pub amount: f64,
    /// The date the amount was booked.
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,
    /// Free text referencing related documents, e.g. invoice numbers.
    pub relations: String,
    /// The journal entry this line belongs to.
    pub general: GeneralId,
}

fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

impl Record {
    /// Get the value of `column` for this record.
    pub fn cell(&self, column: Column) -> Cell {
        match column {
            Column::Account => Cell::Number(self.account as f64),
            Column::Text => Cell::Text(self.text.clone()),
            Column::Amount => Cell::Number(self.amount),
            Column::Date => Cell::Text(self.date.to_string()),
            Column::Relations => Cell::Text(self.relations.clone()),
            Column::General => Cell::Number(self.general as f64),
        }
    }
}

/// The columns of the records table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The account number, `{account}`.
    Account,
    /// The booking text, `{text}`.
    Text,
    /// The booked amount, `{amount}`.
    Amount,
    /// The booking date as `YYYY-MM-DD`, `{date}`.
    Date,
    /// The related documents, `{relations}`.
    Relations,
    /// The journal entry ID, `{general}`.
    General,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 6] = [
        Column::Account,
        Column::Text,
        Column::Amount,
        Column::Date,
        Column::Relations,
        Column::General,
    ];

    /// The column ID used in filter queries and table headers.
    pub fn name(self) -> &'static str {
        match self {
            Column::Account => "account",
            Column::Text => "text",
            Column::Amount => "amount",
            Column::Date => "date",
            Column::Relations => "relations",
            Column::General => "general",
        }
    }

    /// Look up a column by its ID, returns `None` for unknown IDs.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|column| column.name() == name)
    }
}

/// The value of a single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Numeric columns, compared numerically.
    Number(f64),
    /// Text and date columns, compared lexicographically.
    Text(String),
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(number) => write!(f, "{number}"),
            Cell::Text(text) => write!(f, "{text}"),
        }
    }
}
