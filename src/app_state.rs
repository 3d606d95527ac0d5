//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// The state of the server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The ledger shared by every request: the transactions and the form
    /// being filled in.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] that serves `ledger`.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}
