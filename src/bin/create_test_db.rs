use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Month};

use cctable::{AccountNumber, Record, initialize_db, insert_account, insert_record};

/// A utility for creating a test database for the cctable dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const ACCOUNTS: [(AccountNumber, &str); 8] = [
    (1000, "Cash"),
    (1200, "Bank"),
    (1576, "Input VAT 19%"),
    (1776, "VAT 19%"),
    (4210, "Rent"),
    (4930, "Office supplies"),
    (6805, "Telephone"),
    (8400, "Revenue 19% VAT"),
];

/// One journal entry: the lines `(account, amount)` that balance to zero.
struct Entry {
    text: String,
    date: Date,
    relations: String,
    lines: Vec<(AccountNumber, f64)>,
}

fn monthly_entries(year: i32, month: Month) -> Result<Vec<Entry>, Box<dyn Error>> {
    let month_number = month as u8;
    let month_name = month.to_string();

    let invoice_net = 800.0 + 50.0 * f64::from(month_number);
    let invoice_vat = (invoice_net * 0.19 * 100.0).round() / 100.0;
    let phone_net = 39.9;
    let phone_vat = 7.58;

    Ok(vec![
        Entry {
            text: format!("Rent {month_name}"),
            date: Date::from_calendar_date(year, month, 1)?,
            relations: "LEASE-7".to_owned(),
            lines: vec![(1200, -850.0), (4210, 850.0)],
        },
        Entry {
            text: format!("Invoice {year}-{month_number:02}1"),
            date: Date::from_calendar_date(year, month, 15)?,
            relations: format!("RE-{year}-{month_number:02}1"),
            lines: vec![
                (1200, invoice_net + invoice_vat),
                (8400, -invoice_net),
                (1776, -invoice_vat),
            ],
        },
        Entry {
            text: format!("Phone bill {month_name}"),
            date: Date::from_calendar_date(year, month, 20)?,
            relations: String::new(),
            lines: vec![
                (1200, -(phone_net + phone_vat)),
                (6805, phone_net),
                (1576, phone_vat),
            ],
        },
        Entry {
            text: "Printer paper".to_owned(),
            date: Date::from_calendar_date(year, month, 24)?,
            relations: String::new(),
            lines: vec![(1000, -12.5), (4930, 12.5)],
        },
    ])
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'ledger.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'ledger.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating accounts...");
    for (number, name) in ACCOUNTS {
        insert_account(number, name, &conn)?;
    }

    println!("Creating journal entries...");
    let mut general = 0;
    let mut line_count = 0;
    for year in [2016, 2017] {
        let mut month = Month::January;
        loop {
            for entry in monthly_entries(year, month)? {
                general += 1;
                for (account, amount) in entry.lines {
                    let record = Record {
                        account,
                        text: entry.text.clone(),
                        amount: (amount * 100.0).round() / 100.0,
                        date: entry.date,
                        relations: entry.relations.clone(),
                        general,
                    };
                    insert_record(&record, &conn)?;
                    line_count += 1;
                }
            }

            if month == Month::December {
                break;
            }
            month = month.next();
        }
    }

    println!("Created {general} journal entries with {line_count} records.");
    println!("Success!");

    Ok(())
}
