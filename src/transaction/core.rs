//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    transaction::category::{Category, deserialize_optional_category},
};

/// Alias for the integer type used for transaction IDs.
///
/// IDs are assigned by the database on insert and are never reused.
pub type TransactionId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// An expense, i.e. an event where money was spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// What kind of spending this was, if the user picked one.
    pub category: Option<Category>,
}

/// The user editable fields of a transaction.
///
/// This is the body of a create request and, together with an ID, the body
/// of an update request. Call [NewTransaction::validate] before writing it to
/// the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The amount of money spent.
    ///
    /// Expenses are expected to be positive but this is not enforced.
    pub amount: f64,
    /// When the transaction happened, as an ISO 8601 date, e.g. "2024-01-15".
    pub date: Date,
    /// A text description of what the transaction was for, e.g. "Groceries".
    pub description: String,
    /// One of the fixed categories. An empty string is read as no category.
    #[serde(default, deserialize_with = "deserialize_optional_category")]
    pub category: Option<Category>,
}

impl NewTransaction {
    /// Check the fields that the type system cannot.
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if the amount is not a finite number or
    /// the description is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidInput(format!(
                "amount must be a finite number, got {}",
                self.amount
            )));
        }

        if self.description.trim().is_empty() {
            return Err(Error::InvalidInput(
                "description must not be empty".to_owned(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database and return its ID.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidInput] if `transaction` fails validation,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    transaction.validate()?;

    let id = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, date, description, category)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id",
        )?
        .query_row(
            params![
                transaction.amount,
                transaction.date,
                transaction.description,
                transaction.category,
            ],
            |row| row.get(0),
        )?;

    Ok(id)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, amount, date, description, category FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, amount, date, description, category FROM \"transaction\" ORDER BY id")?
        .query_map([], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Replace the fields of the transaction `id` with `transaction`.
///
/// Returns `true` if a transaction with `id` exists and at least one of its
/// fields changed, `false` if there was no such transaction or `transaction`
/// holds the values already stored.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidInput] if `transaction` fails validation,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<bool, Error> {
    transaction.validate()?;

    let rows_affected = connection.execute(
        "UPDATE \"transaction\"
        SET \
            amount = ?1, \
            date = ?2, \
            description = ?3, \
            category = ?4 \
        WHERE id = ?5 \
            AND (amount IS NOT ?1 \
                OR date IS NOT ?2 \
                OR description IS NOT ?3 \
                OR category IS NOT ?4);",
        params![
            transaction.amount,
            transaction.date,
            transaction.description,
            transaction.category,
            id,
        ],
    )?;

    Ok(rows_affected == 1)
}

/// Delete the transaction `id`.
///
/// Returns `true` if the transaction was deleted, `false` if there was no
/// such transaction (e.g. it was already deleted).
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = :id",
        &[(":id", &id)],
    )?;

    Ok(rows_affected == 1)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT
                )",
        (),
    )?;

    // Used for the recent transactions and monthly reports.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let date = row.get(2)?;
    let description = row.get(3)?;
    let category = row.get(4)?;

    Ok(Transaction {
        id,
        amount,
        date,
        description,
        category,
    })
}

// ============================================================================
// TESTS
// ============================================================================
