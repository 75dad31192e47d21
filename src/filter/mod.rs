//! The filter language of the records table.
//!
//! A filter query is a list of expressions joined by `" && "`. Each
//! expression compares a column, written as `{column}`, with a value:
//!
//! ```text
//! {date} datestartswith 2017-08 && {amount} >= 100 && {text} contains "rent"
//! ```

mod apply;
mod parse;

pub use apply::filter_table;
pub use parse::{FilterPart, FilterValue, Operator, split_filter_part};
