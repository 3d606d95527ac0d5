//! Defines the transaction model.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::category::Category;

/// The identifier the store assigns to a transaction when it is appended.
///
/// IDs increase monotonically and are never reused, so an ID held by the form
/// controller stays valid until that exact transaction is removed.
pub type TransactionId = u64;

/// A single recorded expense, entered by hand through the transaction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The amount of money spent.
    pub amount: f64,
    /// What the money was spent on, as typed by the user.
    pub description: String,
    /// When the money was spent.
    pub date: Date,
    /// The category used for the category breakdown.
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(amount: f64, description: &str, date: Date, category: Category) -> Self {
        Self {
            amount,
            description: description.to_owned(),
            date,
            category,
        }
    }
}

/// A transaction paired with the ID the store assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The transaction itself.
    #[serde(flatten)]
    pub transaction: Transaction,
}
