//! The page for editing a transaction from the dashboard.

use axum::extract::{Path, State};
use maud::{Markup, html};

use crate::{
    Database, Error,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    transaction::{
        Transaction, TransactionId,
        form::{TransactionFormDefaults, transaction_form_fields},
        get_transaction,
    },
};

/// Display the edit form for the transaction `transaction_id`.
pub async fn get_edit_transaction_page(
    State(database): State<Database>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Markup, Error> {
    let transaction = {
        let connection = database.acquire()?;
        get_transaction(transaction_id, &connection)?
    };

    Ok(edit_transaction_view(&transaction))
}

fn edit_transaction_view(transaction: &Transaction) -> Markup {
    let defaults = TransactionFormDefaults {
        amount: Some(transaction.amount),
        date: transaction.date,
        description: Some(&transaction.description),
        category: transaction.category,
    };
    let update_endpoint = format_endpoint(endpoints::DASHBOARD_TRANSACTION, transaction.id);

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class={ (CARD_STYLE) " w-full max-w-3xl" }
            {
                h1 class="text-xl font-bold mb-4" { "Edit Transaction" }

                form
                    id="edit-transaction-form"
                    hx-put=(update_endpoint)
                    hx-target-error="#alert-container"
                    class="w-full space-y-4"
                {
                    (transaction_form_fields(&defaults))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
                }

                a href=(endpoints::ROOT) class={ (LINK_STYLE) " block mt-4 text-center" }
                {
                    "Back to dashboard"
                }
            }
        }
    );

    base("Edit Transaction", &[], &content)
}
