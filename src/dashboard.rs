//! The dashboard page: the date-range picker, the account multiselect, the
//! filter query input and the tables they control.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    date_range::DatePickerConfig,
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base},
    ledger::{AccountOption, get_account_options},
    records::{CONTEXT_TABLE_ID, RECORDS_TABLE_ID},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub date_picker: DatePickerConfig,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            date_picker: state.date_picker,
            db_connection: state.db_connection.clone(),
        }
    }
}

const FILTER_QUERY_PLACEHOLDER: &str = "{amount} > 100 && {text} contains rent";

fn controls_view(accounts: &[AccountOption], date_picker: &DatePickerConfig) -> Markup {
    html!(
        form
            id="record-controls"
            hx-get=(endpoints::RECORDS_TABLE)
            hx-target={ "#" (RECORDS_TABLE_ID) }
            hx-target-error="#alert-container"
            hx-swap="innerHTML"
            hx-trigger="change, submit"
            class="grid w-full grid-cols-1 gap-4 md:grid-cols-4"
        {
            div
            {
                label for="start_date" class=(FORM_LABEL_STYLE) { "Start date" }

                input
                    type="date"
                    id="start_date"
                    name="start_date"
                    min=(date_picker.min_date)
                    max=(date_picker.max_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="end_date" class=(FORM_LABEL_STYLE) { "End date" }

                input
                    type="date"
                    id="end_date"
                    name="end_date"
                    min=(date_picker.min_date)
                    max=(date_picker.max_date)
                    value=(date_picker.default_end_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="md:col-span-2"
            {
                label for="accounts" class=(FORM_LABEL_STYLE) { "Accounts" }

                select
                    id="accounts"
                    name="accounts"
                    multiple
                    size="4"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for account in accounts {
                        option value=(account.number) { (account.label) }
                    }
                }
            }

            div class="md:col-span-4"
            {
                label for="filter_query" class=(FORM_LABEL_STYLE) { "Filter" }

                input
                    type="text"
                    id="filter_query"
                    name="filter_query"
                    placeholder=(FILTER_QUERY_PLACEHOLDER)
                    autocomplete="off"
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    )
}

fn dashboard_view(accounts: &[AccountOption], date_picker: &DatePickerConfig) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full space-y-4 lg:max-w-6xl"
            {
                h1 class="text-xl font-bold" { "Accounting Records" }

                (controls_view(accounts, date_picker))

                h2 class="text-lg font-semibold" { "Journal entry" }

                div
                    id=(CONTEXT_TABLE_ID)
                    class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    p class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Select a record to show all lines of its journal entry."
                    }
                }

                h2 class="text-lg font-semibold" { "Records" }

                div
                    id=(RECORDS_TABLE_ID)
                    class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    p class="px-6 py-4 text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Pick a date range or select accounts to show records."
                    }
                }
            }
        }
    );

    base("Dashboard", &content)
}

/// Display the dashboard with an empty records table.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let accounts = get_account_options(&connection)
        .inspect_err(|error| tracing::error!("could not get account options: {error}"))?;

    Ok(dashboard_view(&accounts, &state.date_picker).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use scraper::{Html, Selector};

    use crate::{
        date_range::DatePickerConfig,
        endpoints,
        ledger::test_ledger::get_test_ledger,
        test_utils::{assert_content_type, assert_status_ok, assert_valid_html, parse_html_document},
    };

    use super::{DashboardState, get_dashboard_page};

    async fn get_dashboard_html() -> Html {
        let state = DashboardState {
            date_picker: DatePickerConfig::default(),
            db_connection: Arc::new(Mutex::new(get_test_ledger())),
        };

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    #[track_caller]
    fn must_get_attr<'a>(html: &'a Html, selector: &str, attr: &str) -> &'a str {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("Could not find {selector}"))
            .attr(attr)
            .unwrap_or_else(|| panic!("{selector} has no {attr} attribute"))
    }

    #[tokio::test]
    async fn controls_request_records_table() {
        let html = get_dashboard_html().await;

        assert_eq!(
            must_get_attr(&html, "form#record-controls", "hx-get"),
            endpoints::RECORDS_TABLE
        );
        assert_eq!(
            must_get_attr(&html, "form#record-controls", "hx-target"),
            "#records-table"
        );
        assert!(
            html.select(&Selector::parse("#records-table").unwrap())
                .next()
                .is_some()
        );
        assert!(
            html.select(&Selector::parse("#context-table").unwrap())
                .next()
                .is_some()
        );
    }

    #[tokio::test]
    async fn date_picker_is_bounded_and_has_default_end() {
        let html = get_dashboard_html().await;

        for id in ["#start_date", "#end_date"] {
            assert_eq!(must_get_attr(&html, id, "min"), "1995-08-05");
            assert_eq!(must_get_attr(&html, id, "max"), "2021-09-19");
        }
        assert_eq!(must_get_attr(&html, "#end_date", "value"), "2017-08-25");
        assert!(
            html.select(&Selector::parse("#start_date[value]").unwrap())
                .next()
                .is_none(),
            "want start date to be empty"
        );
    }

    #[tokio::test]
    async fn account_multiselect_lists_accounts() {
        let html = get_dashboard_html().await;

        assert!(
            html.select(&Selector::parse("select#accounts[multiple]").unwrap())
                .next()
                .is_some()
        );
        let options = html
            .select(&Selector::parse("select#accounts option").unwrap())
            .map(|option| {
                (
                    option.attr("value").unwrap_or_default().to_owned(),
                    option.text().collect::<String>(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], ("1000".to_owned(), "1000 Cash".to_owned()));
        assert_eq!(options[1], ("1200".to_owned(), "1200 Bank".to_owned()));
    }

    #[tokio::test]
    async fn has_filter_query_input() {
        let html = get_dashboard_html().await;

        assert_eq!(
            must_get_attr(&html, "input#filter_query", "name"),
            "filter_query"
        );
    }
}
