//! Defines the endpoint for submitting the transaction form.
use axum::{extract::State, response::Response};
use axum_extra::extract::Form;

use crate::{
    ledger::lock_ledger,
    transaction::{Submitted, TransactionFormFields, TransactionState, redirect_to_page},
};

/// A route handler for submitting the transaction form.
///
/// Creates a new transaction, or replaces the transaction being edited, then
/// redirects to the page. Responds with an alert if the form is rejected.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Form(fields): Form<TransactionFormFields>,
) -> Response {
    let mut ledger = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = fields.apply_to(ledger.form_mut()) {
        tracing::debug!("could not read transaction form: {error}");
        return error.into_alert_response();
    }

    match ledger.submit() {
        Ok(Submitted::Created(id)) => {
            tracing::info!("created transaction {id}");
            redirect_to_page()
        }
        Ok(Submitted::Updated(id)) => {
            tracing::info!("updated transaction {id}");
            redirect_to_page()
        }
        Err(rejection) => {
            tracing::debug!("rejected transaction form: {rejection}");
            rejection.into_alert_response()
        }
    }
}
