//! HTML rendering for the transaction form and the transaction list.

use maud::{Markup, html};

use crate::{
    category::Category,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE,
        CARD_STYLE, CARD_TITLE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, format_currency,
        truncate_graphemes,
    },
};

use super::{FormController, StoredTransaction};

/// The max number of graphemes to display in the transaction list before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The card with the form for adding a transaction, or editing one if the
/// controller is in edit mode.
pub(crate) fn transaction_form_view(form: &FormController) -> Markup {
    let (title, submit_label) = if form.is_editing() {
        ("Edit Transaction", "Update Transaction")
    } else {
        ("Add Transaction", "Add Transaction")
    };

    html! {
        section class=(CARD_STYLE) id="transaction-form"
        {
            h2 class=(CARD_TITLE_STYLE) { (title) }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="space-y-4"
            {
                // Every change is sent to the server so the typed values
                // survive the page reload after edit and delete.
                div
                    hx-put=(endpoints::FORM_API)
                    hx-trigger="change"
                    hx-include="closest form"
                    hx-swap="none"
                    class="space-y-4"
                {
                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                        div class="input-wrapper w-full"
                        {
                            input
                                type="number"
                                id="amount"
                                name="amount"
                                step="0.01"
                                placeholder="Amount"
                                value=(form.amount())
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }
                    }

                    div
                    {
                        label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                        input
                            type="text"
                            id="description"
                            name="description"
                            placeholder="Description"
                            value=(form.description())
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                        input
                            type="date"
                            id="date"
                            name="date"
                            value=(form.date())
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                        select
                            id="category"
                            name="category"
                            required
                            class=(FORM_TEXT_INPUT_STYLE)
                        {
                            option value="" selected[form.category().is_none()] { "Select Category" }

                            @for category in Category::ALL {
                                option
                                    value=(category)
                                    selected[form.category() == Some(category)]
                                {
                                    (category)
                                }
                            }
                        }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }

                @if form.is_editing() {
                    button
                        type="button"
                        hx-post=(endpoints::CANCEL_EDIT_API)
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// The card listing every transaction in store order.
pub(crate) fn transaction_list_view(transactions: &[StoredTransaction]) -> Markup {
    html! {
        section class=(CARD_STYLE) id="transaction-list"
        {
            h2 class=(CARD_TITLE_STYLE) { "Transaction List" }

            @if transactions.is_empty() {
                p class="text-gray-500 dark:text-gray-400" data-empty-state="true"
                {
                    "No transactions added yet."
                }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for record in transactions {
                        (transaction_row_view(record))
                    }
                }
            }
        }
    }
}

fn transaction_row_view(record: &StoredTransaction) -> Markup {
    let transaction = &record.transaction;
    let (description, tooltip) = format_description(&transaction.description);
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_API, record.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION_API, record.id);
    let confirm_message = format!(
        "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
        transaction.description
    );

    html! {
        li class="flex items-center justify-between gap-4 py-2" data-transaction-row="true"
        {
            span title=[tooltip]
            {
                (transaction.date) " - " (description) " - "
                (format_currency(transaction.amount)) " (" (transaction.category) ")"
            }

            div class="flex gap-4 shrink-0"
            {
                button
                    type="button"
                    hx-post=(edit_url)
                    hx-target-error="#alert-container"
                    class=(BUTTON_EDIT_STYLE)
                {
                    "Edit"
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

/// Shorten long descriptions, returning the full text as a tooltip.
fn format_description(description: &str) -> (String, Option<&str>) {
    if truncate_graphemes(description, MAX_DESCRIPTION_GRAPHEMES).is_none() {
        return (description.to_owned(), None);
    }

    let truncated = truncate_graphemes(description, MAX_DESCRIPTION_GRAPHEMES - 3)
        .unwrap_or(description);

    (format!("{truncated}..."), Some(description))
}
