//! The in-memory, ordered collection of transactions.

use crate::{
    Error,
    transaction::core::{StoredTransaction, Transaction, TransactionId},
};

/// An ordered sequence of transactions held in memory.
///
/// Position only determines display order. Transactions can be addressed by
/// position (`*_at` methods) or by the [TransactionId] assigned on
/// [TransactionStore::append]. Positions shift when a transaction is removed,
/// so callers should not hold on to an index across mutations; IDs do not
/// have this problem.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStore {
    records: Vec<StoredTransaction>,
    next_id: TransactionId,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the transaction at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&StoredTransaction> {
        self.records.get(index)
    }

    /// The stored transactions in store order.
    pub fn records(&self) -> &[StoredTransaction] {
        &self.records
    }

    /// Iterate over the transactions in store order, without their IDs.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter().map(|record| &record.transaction)
    }

    /// Add `transaction` to the end of the store and return its new ID.
    pub fn append(&mut self, transaction: Transaction) -> TransactionId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(StoredTransaction { id, transaction });

        id
    }

    /// Replace the transaction at `index` with `transaction`.
    ///
    /// The position and ID of the replaced transaction are kept.
    ///
    /// # Errors
    ///
    /// Returns [Error::IndexOutOfRange] if `index` is not less than [TransactionStore::len].
    pub fn replace_at(&mut self, index: usize, transaction: Transaction) -> Result<(), Error> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        record.transaction = transaction;

        Ok(())
    }

    /// Remove the transaction at `index`, shifting every later transaction
    /// down by one position.
    ///
    /// # Errors
    ///
    /// Returns [Error::IndexOutOfRange] if `index` is not less than [TransactionStore::len].
    pub fn remove_at(&mut self, index: usize) -> Result<StoredTransaction, Error> {
        let len = self.records.len();

        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        Ok(self.records.remove(index))
    }

    /// The current position of the transaction with the ID `id`.
    pub fn position(&self, id: TransactionId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Get the transaction with the ID `id`, if it is still in the store.
    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .map(|record| &record.transaction)
    }

    /// Replace the transaction with the ID `id`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if no transaction has the ID `id`.
    pub fn replace(&mut self, id: TransactionId, transaction: Transaction) -> Result<(), Error> {
        let index = self.position(id).ok_or(Error::TransactionNotFound(id))?;

        self.replace_at(index, transaction)
    }

    /// Remove the transaction with the ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if no transaction has the ID `id`.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self.position(id).ok_or(Error::TransactionNotFound(id))?;

        self.remove_at(index).map(|record| record.transaction)
    }
}
