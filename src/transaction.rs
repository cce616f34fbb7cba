//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, its `Category` and the `NewTransaction` input type
//! - Database functions for creating, listing, updating and deleting transactions
//! - The JSON route handlers for the `/transactions` endpoint
//! - The dashboard's transaction form, edit page and form handlers

mod category;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod form_endpoints;
mod list_endpoint;
mod requested_id;

pub use category::Category;
pub use core::{
    NewTransaction, Transaction, TransactionId, count_transactions, create_transaction,
    create_transaction_table, delete_transaction, get_transaction, list_transactions,
    map_transaction_row, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use form::new_transaction_form_view;
pub use form_endpoints::{
    create_transaction_form_endpoint, delete_transaction_form_endpoint,
    update_transaction_form_endpoint,
};
pub use list_endpoint::get_transactions_endpoint;
pub use requested_id::RequestedId;
