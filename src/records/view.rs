//! HTML for the records table and the journal entry context table.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_ODD_STYLE, TABLE_ROW_STYLE, TABLE_STYLE,
        format_amount,
    },
    ledger::{Column, Record},
};

/// The element ID of the container the records table is swapped into.
pub const RECORDS_TABLE_ID: &str = "records-table";
/// The element ID of the container the context table is swapped into.
pub const CONTEXT_TABLE_ID: &str = "context-table";

fn row_style(record: &Record) -> &'static str {
    if record.general % 2 != 0 {
        TABLE_ROW_ODD_STYLE
    } else {
        TABLE_ROW_STYLE
    }
}

fn header_row(with_selection: bool) -> Markup {
    html!(
        tr
        {
            @if with_selection {
                th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Select" } }
            }

            @for column in Column::ALL {
                th scope="col" class=(TABLE_CELL_STYLE) { (column.name()) }
            }
        }
    )
}

fn record_cells(record: &Record) -> Markup {
    html!(
        td class=(TABLE_CELL_STYLE) { (record.account) }
        td class=(TABLE_CELL_STYLE) { (record.text) }
        td class="px-6 py-4 text-right tabular-nums" title=(record.amount)
        {
            (format_amount(record.amount))
        }
        td class=(TABLE_CELL_STYLE) { time datetime=(record.date) { (record.date) } }
        td class=(TABLE_CELL_STYLE) { (record.relations) }
        td class=(TABLE_CELL_STYLE) { (record.general) }
    )
}

fn empty_row(column_count: usize) -> Markup {
    html!(
        tr
        {
            td
                colspan=(column_count)
                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
            {
                "No records found."
            }
        }
    )
}

/// The records table, one selectable row per ledger line.
///
/// Selecting a row loads the lines of its journal entry into the context table.
pub fn records_table(records: &[Record]) -> Markup {
    let table_row = |record: &Record| {
        let context_url = format_endpoint(endpoints::GENERAL_CONTEXT, record.general);

        html!(
            tr class=(row_style(record)) data-general=(record.general)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    input
                        type="radio"
                        name="selected_record"
                        aria-label="Show journal entry"
                        value=(record.general)
                        hx-get=(context_url)
                        hx-trigger="change"
                        hx-target={ "#" (CONTEXT_TABLE_ID) }
                        hx-target-error="#alert-container"
                        hx-swap="innerHTML";
                }

                (record_cells(record))
            }
        )
    };

    html!(
        table id="records" class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE) { (header_row(true)) }

            tbody
            {
                @for record in records {
                    (table_row(record))
                }

                @if records.is_empty() {
                    (empty_row(Column::ALL.len() + 1))
                }
            }
        }
    )
}

/// The context table, the lines of the journal entry of the selected record.
pub fn context_table(records: &[Record]) -> Markup {
    html!(
        table id="context" class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE) { (header_row(false)) }

            tbody
            {
                @for record in records {
                    tr class=(row_style(record)) { (record_cells(record)) }
                }

                @if records.is_empty() {
                    (empty_row(Column::ALL.len()))
                }
            }
        }
    )
}
