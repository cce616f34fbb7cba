//! The HTML form for creating and editing transactions on the dashboard.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::{Category, NewTransaction},
};

/// The shortest description, in characters, the dashboard form accepts.
pub const MIN_DESCRIPTION_LENGTH: usize = 3;

/// The form data for creating or editing a transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// The amount spent in dollars.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// What the money was spent on.
    pub description: String,
    /// The selected category, `None` for the empty option.
    #[serde(default)]
    pub category: Option<Category>,
}

impl TransactionForm {
    /// Check the form the way the dashboard asks the browser to and convert it
    /// into a [NewTransaction].
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if the amount is not positive or the
    /// description is shorter than [MIN_DESCRIPTION_LENGTH] characters.
    pub fn into_new_transaction(self) -> Result<NewTransaction, Error> {
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(Error::InvalidInput(
                "Enter an amount greater than zero.".to_owned(),
            ));
        }

        let description = self.description.trim();
        if description.chars().count() < MIN_DESCRIPTION_LENGTH {
            return Err(Error::InvalidInput(format!(
                "Enter a description of at least {MIN_DESCRIPTION_LENGTH} characters."
            )));
        }

        Ok(NewTransaction {
            amount: self.amount,
            date: self.date,
            description: description.to_owned(),
            category: self.category,
        })
    }
}

/// The values to pre-fill the form fields with.
pub struct TransactionFormDefaults<'a> {
    pub amount: Option<f64>,
    pub date: Date,
    pub description: Option<&'a str>,
    pub category: Option<Category>,
}

/// The form for adding a transaction from the dashboard.
pub fn new_transaction_form_view(today: Date) -> Markup {
    let defaults = TransactionFormDefaults {
        amount: None,
        date: today,
        description: None,
        category: None,
    };

    html! {
        form
            id="new-transaction-form"
            hx-post=(endpoints::DASHBOARD_TRANSACTIONS)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            (transaction_form_fields(&defaults))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));

    html! {
        div class="grid grid-cols-1 md:grid-cols-4 gap-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    minlength=(MIN_DESCRIPTION_LENGTH)
                    required
                    value=[defaults.description]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[defaults.category.is_none()] { "No category" }

                    @for category in Category::ALL {
                        option
                            value=(category)
                            selected[defaults.category == Some(category)]
                        {
                            (category)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        Error, endpoints,
        transaction::{
            Category, NewTransaction,
            form::{
                TransactionForm, TransactionFormDefaults, new_transaction_form_view,
                transaction_form_fields,
            },
        },
    };

    fn lunch_form() -> TransactionForm {
        TransactionForm {
            amount: 12.5,
            date: date!(2024 - 03 - 01),
            description: "  Lunch ".to_owned(),
            category: Some(Category::Food),
        }
    }

    #[test]
    fn valid_form_becomes_new_transaction() {
        assert_eq!(
            lunch_form().into_new_transaction(),
            Ok(NewTransaction {
                amount: 12.5,
                date: date!(2024 - 03 - 01),
                description: "Lunch".to_owned(),
                category: Some(Category::Food),
            })
        );
    }

    #[test]
    fn rejects_amounts_that_are_not_positive() {
        for amount in [0.0, -5.0, f64::NAN] {
            let form = TransactionForm {
                amount,
                ..lunch_form()
            };

            assert!(
                matches!(form.into_new_transaction(), Err(Error::InvalidInput(_))),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_short_descriptions() {
        for description in ["", "ab", "  ab  ", "éé"] {
            let form = TransactionForm {
                description: description.to_owned(),
                ..lunch_form()
            };

            assert!(
                matches!(form.into_new_transaction(), Err(Error::InvalidInput(_))),
                "description {description:?} should be rejected"
            );
        }

        let form = TransactionForm {
            description: "Bus".to_owned(),
            ..lunch_form()
        };
        assert!(form.into_new_transaction().is_ok());
    }

    #[test]
    fn new_form_posts_to_dashboard_endpoint() {
        let markup = new_transaction_form_view(date!(2024 - 03 - 01));

        let fragment = Html::parse_fragment(&markup.into_string());
        let form = fragment
            .select(&Selector::parse("form#new-transaction-form").unwrap())
            .next()
            .expect("form not found");
        assert_eq!(
            form.value().attr("hx-post"),
            Some(endpoints::DASHBOARD_TRANSACTIONS)
        );
        assert_eq!(
            form.value().attr("hx-target-error"),
            Some("#alert-container")
        );

        let date = fragment
            .select(&Selector::parse("input#date").unwrap())
            .next()
            .unwrap();
        assert_eq!(date.value().attr("value"), Some("2024-03-01"));
    }

    #[test]
    fn fields_ask_browser_to_validate() {
        let markup = transaction_form_fields(&TransactionFormDefaults {
            amount: None,
            date: date!(2024 - 03 - 01),
            description: None,
            category: None,
        });

        let fragment = Html::parse_fragment(&markup.into_string());
        let amount = fragment
            .select(&Selector::parse("input#amount").unwrap())
            .next()
            .unwrap();
        assert_eq!(amount.value().attr("min"), Some("0.01"));
        assert!(amount.value().attr("required").is_some());

        let description = fragment
            .select(&Selector::parse("input#description").unwrap())
            .next()
            .unwrap();
        assert_eq!(description.value().attr("minlength"), Some("3"));
        assert!(description.value().attr("required").is_some());

        let date = fragment
            .select(&Selector::parse("input#date").unwrap())
            .next()
            .unwrap();
        assert!(date.value().attr("required").is_some());
    }

    #[test]
    fn fields_preselect_defaults() {
        let markup = transaction_form_fields(&TransactionFormDefaults {
            amount: Some(12.5),
            date: date!(2024 - 03 - 01),
            description: Some("Lunch"),
            category: Some(Category::Transport),
        });

        let fragment = Html::parse_fragment(&markup.into_string());
        let amount = fragment
            .select(&Selector::parse("input#amount").unwrap())
            .next()
            .unwrap();
        assert_eq!(amount.value().attr("value"), Some("12.50"));

        let options = Selector::parse("select#category option").unwrap();
        assert_eq!(fragment.select(&options).count(), Category::ALL.len() + 1);

        let selected: Vec<_> = fragment
            .select(&Selector::parse("select#category option[selected]").unwrap())
            .filter_map(|option| option.value().attr("value"))
            .collect();
        assert_eq!(selected, vec!["Transport"]);
    }
}
