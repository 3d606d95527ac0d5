//! Defines the endpoint that keeps the form fields in sync as the user types.
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::Category,
    ledger::lock_ledger,
    transaction::{FormController, TransactionState},
};

/// The raw values of the transaction form.
///
/// Every field is text as typed by the user. Validation happens on submit.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionFormFields {
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date when the transaction ocurred, formatted as YYYY-MM-DD.
    #[serde(default)]
    pub date: String,
    /// The name of the category, or an empty string if none is selected.
    #[serde(default)]
    pub category: String,
}

impl TransactionFormFields {
    /// Copy the fields into `form`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCategory] if the category is not empty and not
    /// a known category. `form` is left unchanged in this case.
    pub(crate) fn apply_to(&self, form: &mut FormController) -> Result<(), Error> {
        let category = Category::parse_optional(&self.category)?;

        form.set_amount(&self.amount);
        form.set_description(&self.description);
        form.set_date(&self.date);
        form.set_category(category);

        Ok(())
    }
}

/// A route handler for field changes, stores the field values without
/// validating them.
pub async fn update_form_endpoint(
    State(state): State<TransactionState>,
    Form(fields): Form<TransactionFormFields>,
) -> Response {
    let mut ledger = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    match fields.apply_to(ledger.form_mut()) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::debug!("could not update form fields: {error}");
            error.into_alert_response()
        }
    }
}
