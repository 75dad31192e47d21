//! Accounts offered in the account multiselect.

use rusqlite::Connection;

use crate::{Error, ledger::record::AccountNumber};

/// An option of the account multiselect.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountOption {
    /// The value submitted when the option is selected.
    pub number: AccountNumber,
    /// The text shown to the user, e.g. "1200 Bank".
    pub label: String,
}

/// Get every account as a multiselect option, ordered by account number.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn get_account_options(connection: &Connection) -> Result<Vec<AccountOption>, Error> {
    connection
        .prepare("SELECT number, name FROM account ORDER BY number ASC")?
        .query_map([], |row| {
            let number: AccountNumber = row.get(0)?;
            let name: String = row.get(1)?;

            Ok(AccountOption {
                number,
                label: format!("{number} {name}"),
            })
        })?
        .map(|option_result| option_result.map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::ledger::{create_ledger_tables, insert_account};

    use super::{AccountOption, get_account_options};

    fn get_test_connection() -> Connection {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
        create_ledger_tables(&connection).expect("Could not create ledger tables");
        connection
    }

    #[test]
    fn returns_options_ordered_by_number() {
        let connection = get_test_connection();
        insert_account(4400, "Revenue 19% VAT", &connection).unwrap();
        insert_account(1200, "Bank", &connection).unwrap();

        let options = get_account_options(&connection);

        assert_eq!(
            options,
            Ok(vec![
                AccountOption {
                    number: 1200,
                    label: "1200 Bank".to_owned()
                },
                AccountOption {
                    number: 4400,
                    label: "4400 Revenue 19% VAT".to_owned()
                },
            ])
        );
    }

    #[test]
    fn returns_empty_list_without_accounts() {
        let connection = get_test_connection();

        assert_eq!(get_account_options(&connection), Ok(vec![]));
    }
}
