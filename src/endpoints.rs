//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g. '/dashboard/transactions/{transaction_id}',
//! use [format_endpoint].

/// The root route which serves the dashboard page.
pub const ROOT: &str = "/";
/// The route to list, create, update and delete transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for the total, category breakdown and recent transactions.
pub const TRANSACTIONS_SUMMARY: &str = "/transactions/summary";
/// The route for the totals grouped by month.
pub const TRANSACTIONS_MONTHLY: &str = "/transactions/monthly";
/// The route the dashboard's new transaction form posts to.
pub const DASHBOARD_TRANSACTIONS: &str = "/dashboard/transactions";
/// The route the dashboard uses to update (PUT) or delete (DELETE) one transaction.
pub const DASHBOARD_TRANSACTION: &str = "/dashboard/transactions/{transaction_id}";
/// The page for editing a transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/dashboard/transactions/{transaction_id}/edit";

/// Replace the first `{parameter}` in `endpoint_path` with `id`.
///
/// Returns `endpoint_path` unchanged if it has no parameter.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| start + offset + 1);

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end..])
}
