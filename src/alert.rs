//! Alert messages for reporting the outcome of an action to the user.
//!
//! Alerts are rendered as HTML fragments and swapped into the alert container
//! at the bottom of the page by htmx.

use maud::{Markup, html};

/// An alert message with a short summary and optional details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action failed.
    Error {
        /// A short summary of what went wrong.
        message: String,
        /// How to fix the problem, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let Alert::Error { message, details } = self;
        let style = "text-red-800 border-red-300 bg-red-50 \
            dark:bg-gray-800 dark:text-red-400 dark:border-red-800";

        html! {
            div
                role="alert"
                class={ "flex items-start gap-3 p-4 mb-4 text-sm border rounded-lg shadow " (style) }
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-auto font-bold"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        }
    }
}
