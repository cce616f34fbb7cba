//! Read-only reports aggregated over all transactions.
//!
//! This module contains:
//! - The queries for monthly totals, the grand total, the per-category
//!   breakdown and the most recent transactions
//! - The JSON route handlers for the summary and monthly endpoints

mod monthly_endpoint;
mod queries;
mod summary_endpoint;

pub use monthly_endpoint::get_monthly_totals_endpoint;
pub use queries::{
    CategoryTotal, MonthlyTotal, RECENT_TRANSACTION_COUNT, Summary, category_breakdown,
    grand_total, monthly_totals, recent_transactions, summary,
};
pub use summary_endpoint::get_summary_endpoint;
