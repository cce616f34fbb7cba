//! Dashboard HTTP handler and view rendering.

use axum::extract::State;
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    Database, Error,
    dashboard::charts::{
        DashboardChart, category_chart, category_label, charts_script, charts_view,
        monthly_expenses_chart,
    },
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, CATEGORY_BADGE_STYLE, HeadElement, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency,
    },
    report::{CategoryTotal, MonthlyTotal, Summary, monthly_totals, summary},
    transaction::{Transaction, list_transactions, new_transaction_form_view},
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    summary: Summary,
    monthly_totals: Vec<MonthlyTotal>,
    transactions: Vec<Transaction>,
}

/// Display a page with an overview of the user's spending.
pub async fn get_dashboard_page(State(database): State<Database>) -> Result<Markup, Error> {
    let data = {
        let connection = database.acquire()?;

        DashboardData {
            summary: summary(&connection)?,
            monthly_totals: monthly_totals(&connection)?,
            transactions: list_transactions(&connection)?,
        }
    };

    let today = OffsetDateTime::now_utc().date();

    if data.transactions.is_empty() {
        return Ok(dashboard_no_data_view(today));
    }

    Ok(dashboard_view(&data, today))
}

fn dashboard_view(data: &DashboardData, today: Date) -> Markup {
    let charts = [
        DashboardChart {
            id: "category-chart",
            options: category_chart(&data.summary.category_breakdown).to_string(),
        },
        DashboardChart {
            id: "monthly-expenses-chart",
            options: monthly_expenses_chart(&data.monthly_totals).to_string(),
        },
    ];

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Finance Tracker" }

            (new_transaction_section(today))

            div class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full mb-4"
            {
                div id="total-card" class=(CARD_STYLE)
                {
                    h2 class="text-lg font-semibold" { "Total Expenses" }
                    p class="text-2xl font-bold" { (format_currency(data.summary.total)) }
                }

                div class={ (CARD_STYLE) " md:col-span-2" }
                {
                    h2 class="text-lg font-semibold mb-2" { "By Category" }
                    (category_totals_list(&data.summary.category_breakdown))
                }
            }

            (charts_view(&charts))

            section id="recent-transactions" class="w-full mb-8"
            {
                h2 class="text-xl font-semibold mb-2" { "Recent Transactions" }
                (transactions_table(&data.summary.recent_transactions, false))
            }

            section id="all-transactions" class="w-full mb-8"
            {
                h2 class="text-xl font-semibold mb-2" { "All Transactions" }
                (transactions_table(&data.transactions, true))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

fn dashboard_no_data_view(today: Date) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Finance Tracker" }

            (new_transaction_section(today))

            p id="no-data" class="text-gray-600 dark:text-gray-400"
            {
                "No transactions yet. Add one with the form above to see your spending here."
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn new_transaction_section(today: Date) -> Markup {
    html!(
        section id="new-transaction" class={ (CARD_STYLE) " w-full mb-4" }
        {
            h2 class="text-lg font-semibold mb-2" { "Add Transaction" }
            (new_transaction_form_view(today))
        }
    )
}

fn category_totals_list(breakdown: &[CategoryTotal]) -> Markup {
    html!(
        ul class="space-y-1"
        {
            @for total in breakdown {
                li class="flex justify-between"
                {
                    span class=(CATEGORY_BADGE_STYLE) { (category_label(total)) }
                    span { (format_currency(total.total)) }
                }
            }
        }
    )
}

fn transactions_table(transactions: &[Transaction], show_actions: bool) -> Markup {
    html!(
        div class="relative overflow-x-auto shadow-md rounded"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }

                        @if show_actions {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                @if let Some(category) = transaction.category {
                                    span class=(CATEGORY_BADGE_STYLE) { (category) }
                                }
                            }
                            td class={ (TABLE_CELL_STYLE) " text-right" }
                            {
                                (format_currency(transaction.amount))
                            }

                            @if show_actions {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    (transaction_actions(transaction))
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

fn transaction_actions(transaction: &Transaction) -> Markup {
    html!(
        div class="flex gap-4"
        {
            a
                href=(format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id))
                class=(LINK_STYLE)
            {
                "Edit"
            }

            button
                hx-delete=(format_endpoint(endpoints::DASHBOARD_TRANSACTION, transaction.id))
                hx-confirm={
                    "Are you sure you want to delete '" (transaction.description) "'?"
                }
                hx-target-error="#alert-container"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    )
}
