//! Defines the endpoints for starting and cancelling an edit.
use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    ledger::lock_ledger,
    transaction::{TransactionId, TransactionState, redirect_to_page},
};

/// A route handler that loads a transaction into the form for editing.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    match ledger.begin_edit(transaction_id) {
        Ok(()) => redirect_to_page(),
        Err(error) => {
            tracing::debug!("could not edit transaction {transaction_id}: {error}");
            Error::EditMissingTransaction(transaction_id).into_alert_response()
        }
    }
}

/// A route handler that leaves edit mode and clears the form.
pub async fn cancel_edit_endpoint(State(state): State<TransactionState>) -> Response {
    match lock_ledger(&state.ledger) {
        Ok(mut ledger) => {
            ledger.cancel_edit();
            redirect_to_page()
        }
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Router, routing::post};
    use axum_htmx::HX_REDIRECT;
    use axum_test::TestServer;
    use time::macros::date;

    use crate::{
        category::Category,
        endpoints::{self, format_endpoint},
        ledger::Ledger,
        transaction::{
            Transaction, TransactionState, cancel_edit_endpoint, edit_transaction_endpoint,
        },
    };

    fn get_test_server() -> (TestServer, Arc<Mutex<Ledger>>) {
        let ledger = Arc::new(Mutex::new(Ledger::with_transactions([Transaction::new(
            9.99,
            "Streaming",
            date!(2024 - 04 - 01),
            Category::Bills,
        )])));
        let app = Router::new()
            .route(endpoints::EDIT_TRANSACTION_API, post(edit_transaction_endpoint))
            .route(endpoints::CANCEL_EDIT_API, post(cancel_edit_endpoint))
            .with_state(TransactionState {
                ledger: ledger.clone(),
            });

        (
            TestServer::new(app).expect("Could not create test server."),
            ledger,
        )
    }

    #[tokio::test]
    async fn edit_loads_transaction_into_form() {
        let (server, ledger) = get_test_server();

        let response = server
            .post(&format_endpoint(endpoints::EDIT_TRANSACTION_API, 1))
            .await;

        response.assert_status_see_other();
        assert_eq!(response.header(HX_REDIRECT), "/");
        let ledger = ledger.lock().unwrap();
        assert_eq!(ledger.form().editing(), Some(1));
        assert_eq!(ledger.form().description(), "Streaming");
        assert_eq!(ledger.form().amount(), "9.99");
    }

    #[tokio::test]
    async fn edit_missing_transaction_is_not_found() {
        let (server, ledger) = get_test_server();

        server
            .post(&format_endpoint(endpoints::EDIT_TRANSACTION_API, 2))
            .await
            .assert_status_not_found();

        assert!(!ledger.lock().unwrap().form().is_editing());
    }

    #[tokio::test]
    async fn cancel_leaves_edit_mode() {
        let (server, ledger) = get_test_server();
        ledger.lock().unwrap().begin_edit(1).unwrap();

        server
            .post(endpoints::CANCEL_EDIT_API)
            .await
            .assert_status_see_other();

        let ledger = ledger.lock().unwrap();
        assert!(!ledger.form().is_editing());
        assert_eq!(ledger.form().description(), "");
        assert_eq!(ledger.store().len(), 1, "cancel must not change the store");
    }
}
