//! Aggregation queries over the transaction table.
//!
//! Every report is computed by SQLite from the current contents of the table
//! on each call. Nothing is cached.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    transaction::{Category, Transaction, map_transaction_row},
};

/// How many transactions the summary lists as recent.
pub const RECENT_TRANSACTION_COUNT: u32 = 5;

/// The sum of all transaction amounts in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// The calendar year, e.g. 2024.
    pub year: i32,
    /// The month of the year, 1 for January through 12 for December.
    pub month: u8,
    /// The sum of the amounts of the transactions in this month.
    pub total_amount: f64,
}

/// The sum of all transaction amounts filed under one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category, or `None` for transactions without one.
    pub category: Option<Category>,
    /// The sum of the amounts of the transactions in this category.
    pub total: f64,
}

/// The numbers shown on the dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of every transaction amount.
    pub total: f64,
    /// The totals per category.
    pub category_breakdown: Vec<CategoryTotal>,
    /// The [RECENT_TRANSACTION_COUNT] most recent transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
}

/// Sum the transaction amounts per calendar month.
///
/// The totals are sorted by year and then month, oldest first. Months without
/// any transactions are left out.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn monthly_totals(connection: &Connection) -> Result<Vec<MonthlyTotal>, Error> {
    connection
        .prepare(
            "SELECT
                CAST(strftime('%Y', date) AS INTEGER) AS year,
                CAST(strftime('%m', date) AS INTEGER) AS month,
                SUM(amount)
            FROM \"transaction\"
            GROUP BY year, month
            ORDER BY year ASC, month ASC",
        )?
        .query_map([], |row| {
            Ok(MonthlyTotal {
                year: row.get(0)?,
                month: row.get(1)?,
                total_amount: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Sum the amounts of every transaction, zero if there are none.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn grand_total(connection: &Connection) -> Result<f64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM \"transaction\"",
            [],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// Sum the transaction amounts per category.
///
/// Transactions without a category are grouped together under `None`. The
/// totals are sorted by category name with the uncategorised group last.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn category_breakdown(connection: &Connection) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT category, SUM(amount)
            FROM \"transaction\"
            GROUP BY category
            ORDER BY category IS NULL, category",
        )?
        .query_map([], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Get the `count` transactions with the latest dates, newest first.
///
/// Transactions on the same date are returned in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn recent_transactions(count: u32, connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, date, description, category
            FROM \"transaction\"
            ORDER BY date DESC, id ASC
            LIMIT :count",
        )?
        .query_map(&[(":count", &count)], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Get the grand total, category breakdown and recent transactions together.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn summary(connection: &Connection) -> Result<Summary, Error> {
    Ok(Summary {
        total: grand_total(connection)?,
        category_breakdown: category_breakdown(connection)?,
        recent_transactions: recent_transactions(RECENT_TRANSACTION_COUNT, connection)?,
    })
}
