use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Date, Month};

use finance_tracker::{Category, Database, NewTransaction, create_transaction};

/// A utility for creating a database of sample transactions for the finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'finance.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let database = Database::connect(&args.output_path)?;
    let connection = database.acquire()?;

    let samples = sample_transactions()?;
    println!("Creating {} transactions...", samples.len());

    for transaction in samples {
        create_transaction(transaction, &connection)?;
    }

    println!("Success!");

    Ok(())
}

fn sample_transactions() -> Result<Vec<NewTransaction>, time::error::ComponentRange> {
    let recurring = [
        (1_450.0, 1, "Rent", Some(Category::Rent)),
        (84.3, 6, "Power bill", Some(Category::Utilities)),
        (132.75, 9, "Supermarket", Some(Category::Food)),
        (42.0, 12, "Bus card top up", Some(Category::Transport)),
        (18.5, 16, "Cinema", Some(Category::Entertainment)),
        (96.2, 19, "Supermarket", Some(Category::Food)),
        (59.99, 23, "Shoes", Some(Category::Shopping)),
        (12.0, 27, "Parking", None),
    ];

    let mut transactions = Vec::new();

    for month in [Month::January, Month::February, Month::March, Month::April] {
        for (amount, day, description, category) in recurring {
            transactions.push(NewTransaction {
                amount,
                date: Date::from_calendar_date(2024, month, day)?,
                description: description.to_owned(),
                category,
            });
        }
    }

    transactions.push(NewTransaction {
        amount: 25.0,
        date: Date::from_calendar_date(2023, Month::December, 24)?,
        description: "Gift wrap".to_owned(),
        category: Some(Category::Other),
    });

    Ok(transactions)
}
