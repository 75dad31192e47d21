//! Implements a struct that holds the state of the dashboard server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, date_range::DatePickerConfig, db::initialize};

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The bounds and defaults of the date-range picker.
    pub date_picker: DatePickerConfig,

    /// The maximum number of records returned for a date range when no
    /// account is selected, `None` for no limit.
    pub record_limit: Option<u32>,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the ledger tables if they are missing.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        date_picker: DatePickerConfig,
        record_limit: Option<u32>,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            date_picker,
            record_limit,
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
