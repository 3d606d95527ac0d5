use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    ledger::lock_ledger,
    transaction::{TransactionId, TransactionState, redirect_to_page},
};

/// A route handler for deleting a transaction, redirects to the page on
/// success and responds with an alert otherwise.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger,
        Err(error) => return error.into_alert_response(),
    };

    match ledger.delete(transaction_id) {
        Ok(transaction) => {
            tracing::info!(
                "deleted transaction {transaction_id} \"{}\"",
                transaction.description
            );
            redirect_to_page()
        }
        Err(error) => {
            tracing::debug!("could not delete transaction {transaction_id}: {error}");
            Error::DeleteMissingTransaction(transaction_id).into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Router, routing::delete};
    use axum_test::TestServer;
    use time::macros::date;

    use crate::{
        category::Category,
        endpoints::{self, format_endpoint},
        ledger::Ledger,
        transaction::{Transaction, TransactionState, delete_transaction_endpoint},
    };

    fn get_test_server() -> (TestServer, Arc<Mutex<Ledger>>) {
        let ledger = Arc::new(Mutex::new(Ledger::with_transactions([
            Transaction::new(1.23, "Gum", date!(2025 - 10 - 26), Category::Food),
            Transaction::new(4.56, "Bus", date!(2025 - 10 - 27), Category::Transport),
        ])));
        let app = Router::new()
            .route(endpoints::TRANSACTION_API, delete(delete_transaction_endpoint))
            .with_state(TransactionState {
                ledger: ledger.clone(),
            });

        (
            TestServer::new(app).expect("Could not create test server."),
            ledger,
        )
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let (server, ledger) = get_test_server();

        server
            .delete(&format_endpoint(endpoints::TRANSACTION_API, 1))
            .await
            .assert_status_see_other();

        let ledger = ledger.lock().unwrap();
        assert_eq!(ledger.store().len(), 1);
        assert_eq!(ledger.store().get(0).unwrap().transaction.description, "Bus");
    }

    #[tokio::test]
    async fn deleting_missing_transaction_is_not_found() {
        let (server, ledger) = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION_API, 9))
            .await;

        response.assert_status_not_found();
        response.assert_text_contains("Could not delete transaction");
        assert_eq!(ledger.lock().unwrap().store().len(), 2);
    }
}
