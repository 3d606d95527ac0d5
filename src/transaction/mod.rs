//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `TransactionStore`
//! - The `FormController` that turns form fields into transactions
//! - Route handlers for submitting, editing and deleting transactions
//! - View functions for the transaction form and list

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod form_endpoint;
mod store;
mod view;

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, endpoints, ledger::Ledger};

pub use core::{StoredTransaction, Transaction, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{cancel_edit_endpoint, edit_transaction_endpoint};
pub use form::{Field, FormController, Rejection, Submitted};
pub use form_endpoint::{TransactionFormFields, update_form_endpoint};
pub use store::TransactionStore;
pub(crate) use view::{transaction_form_view, transaction_list_view};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The ledger holding the transactions and the form.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Tell htmx to reload the page so the list and charts show the change.
fn redirect_to_page() -> Response {
    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
