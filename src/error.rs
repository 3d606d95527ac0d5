//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, error_page::ErrorPage, transaction::TransactionId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The category in a request is not one of the fixed set of categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// A positional store operation was given an index past the end of the
    /// store.
    #[error("index {index} is out of range for a store with {len} transactions")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of transactions in the store at the time.
        len: usize,
    },

    /// No transaction with the given ID exists in the store.
    #[error("no transaction with the ID {0}")]
    TransactionNotFound(TransactionId),

    /// Tried to edit a transaction that does not exist.
    #[error("tried to edit transaction {0} which is not in the ledger")]
    EditMissingTransaction(TransactionId),

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete transaction {0} which is not in the ledger")]
    DeleteMissingTransaction(TransactionId),

    /// Could not acquire the ledger lock.
    ///
    /// This happens when a thread panicked while holding the lock.
    #[error("could not acquire the ledger lock")]
    LockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::TransactionNotFound(_)
            | Error::EditMissingTransaction(_)
            | Error::DeleteMissingTransaction(_) => ErrorPage::not_found().into_response(),
            Error::LockError => ErrorPage::internal_server_error().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_server_error().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: format!(
                        "\"{category}\" is not a category. Choose one of the categories from the list."
                    ),
                },
            ),
            Error::EditMissingTransaction(_) | Error::TransactionNotFound(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not edit transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has been deleted."
                        .to_owned(),
                },
            ),
            Error::DeleteMissingTransaction(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
