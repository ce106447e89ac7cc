//! Contact Book - Main entry point
//!
//! Builds a small directory of sample contacts, applies a few edits, and
//! prints everyone whose birthday falls in the upcoming window.

use anyhow::Result;
use contact_book::{Config, Directory, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let today = config.today();
    info!(today = %today, window_days = config.window_days, "Starting contact book");

    let mut book = Directory::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    john.add_birthday("20.05.1990")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    jane.add_birthday("22.05.1990")?;
    book.add_record(jane);

    let mut lary = Record::new("Lary")?;
    lary.add_phone("7777777777")?;
    lary.add_birthday("21.05.2000")?;
    book.add_record(lary);

    for record in book.records() {
        println!("{}", record);
    }

    if let Some(mut john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")?;
        println!("{}", john);

        match john.find_phone("5555555555") {
            Some(phone) => println!("{}: {}", john.name(), phone),
            None => println!("{}: no phone 5555555555", john.name()),
        }
    }

    book.delete("Jane");

    let upcoming = book.upcoming_birthdays_within(today, config.window_days);
    if upcoming.is_empty() {
        println!("No birthdays in the next {} days", config.window_days);
    } else {
        println!("Birthdays in the next {} days:", config.window_days);
        for entry in &upcoming {
            println!("- {}: {}", entry.name, entry.congratulation_date_text());
        }
    }

    info!("Contact book finished");
    Ok(())
}
