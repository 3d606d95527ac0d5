//! The ledger: the transaction store and the form controller owned together
//! as the state of a single page.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::Category,
    dashboard::{CategoryTotal, MonthTotal, category_totals, month_totals},
    transaction::{
        FormController, Rejection, StoredTransaction, Submitted, Transaction, TransactionId,
        TransactionStore,
    },
};

/// Everything the page shows, derived from the ledger in one go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// The categories available in the form, in display order.
    pub categories: Vec<Category>,
    /// The transactions in store order.
    pub transactions: Vec<StoredTransaction>,
    /// The total per category, in category order.
    pub category_totals: Vec<CategoryTotal>,
    /// The total per month, in first-occurrence order.
    pub month_totals: Vec<MonthTotal>,
    /// The transaction the form is editing, if any.
    pub editing: Option<TransactionId>,
}

/// The transactions and the form used to add and edit them.
///
/// All mutations go through the ledger so the form controller never points
/// at a transaction that has been deleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    store: TransactionStore,
    form: FormController,
}

impl Ledger {
    /// Create an empty ledger with an idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding `transactions`, in order, and an idle form.
    pub fn with_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let mut store = TransactionStore::new();

        for transaction in transactions {
            store.append(transaction);
        }

        Self {
            store,
            form: FormController::new(),
        }
    }

    /// The transactions in the order they were added.
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// The current form fields and edit target.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Access the form fields for the field change actions.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Submit the form, see [FormController::submit].
    pub fn submit(&mut self) -> Result<Submitted, Rejection> {
        self.form.submit(&mut self.store)
    }

    /// Load the transaction with the ID `id` into the form for editing.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no transaction with
    /// the ID `id`.
    pub fn begin_edit(&mut self, id: TransactionId) -> Result<(), Error> {
        self.form.begin_edit(id, &self.store)
    }

    /// Leave edit mode without saving, see [FormController::cancel_edit].
    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    /// Delete the transaction with the ID `id`.
    ///
    /// If the form was editing that transaction it stops editing, but keeps
    /// the typed values so they can be added as a new transaction.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no transaction with
    /// the ID `id`.
    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let removed = self.store.remove(id)?;

        if self.form.editing() == Some(id) {
            tracing::debug!("transaction {id} was deleted while being edited");
            self.form.detach();
        }

        Ok(removed)
    }

    /// The total spent per category, in [Category::ALL] order.
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        category_totals(self.store.transactions())
    }

    /// The total spent per month label, in first-occurrence order.
    pub fn month_totals(&self) -> Vec<MonthTotal> {
        month_totals(self.store.transactions())
    }

    /// Collect the data shown on the page.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            categories: Category::ALL.to_vec(),
            transactions: self.store.records().to_vec(),
            category_totals: self.category_totals(),
            month_totals: self.month_totals(),
            editing: self.form.editing(),
        }
    }
}

/// Lock `ledger`, logging and converting a poisoned lock into [Error::LockError].
pub(crate) fn lock_ledger(ledger: &Mutex<Ledger>) -> Result<MutexGuard<'_, Ledger>, Error> {
    ledger.lock().map_err(|error| {
        tracing::error!("could not acquire the ledger lock: {error}");
        Error::LockError
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use time::macros::date;

    use crate::{
        Error,
        category::Category,
        ledger::{Ledger, lock_ledger},
        transaction::{Field, Rejection, Submitted, Transaction},
    };

    fn fill_form(ledger: &mut Ledger, amount: &str, description: &str, date: &str, category: &str) {
        let form = ledger.form_mut();
        form.set_amount(amount);
        form.set_description(description);
        form.set_date(date);
        form.set_category(Category::parse_optional(category).unwrap());
    }

    #[test]
    fn submit_with_empty_description_leaves_store_unchanged() {
        let mut ledger = Ledger::new();
        fill_form(&mut ledger, "50", "", "2024-01-05", "Food");

        let result = ledger.submit();

        assert_eq!(result, Err(Rejection::MissingField(Field::Description)));
        assert_eq!(ledger.store().len(), 0);
    }

    #[test]
    fn submitted_transaction_shows_in_category_totals() {
        let mut ledger = Ledger::new();
        fill_form(&mut ledger, "50", "Coffee", "2024-01-05", "Food");

        ledger.submit().unwrap();

        assert_eq!(ledger.store().len(), 1);
        for total in ledger.category_totals() {
            let want = if total.name == Category::Food { 50.0 } else { 0.0 };
            assert_eq!(total.value, want, "unexpected total for {}", total.name);
        }
    }

    #[test]
    fn month_totals_group_by_first_occurrence() {
        let mut ledger = Ledger::new();
        fill_form(&mut ledger, "10", "Lunch", "2024-01-05", "Food");
        ledger.submit().unwrap();
        fill_form(&mut ledger, "20", "Train", "2024-02-05", "Transport");
        ledger.submit().unwrap();
        fill_form(&mut ledger, "5", "Snack", "2024-01-25", "Food");
        ledger.submit().unwrap();

        let totals: Vec<_> = ledger
            .month_totals()
            .into_iter()
            .map(|total| (total.month, total.expense))
            .collect();

        assert_eq!(
            totals,
            vec![("Jan".to_owned(), 15.0), ("Feb".to_owned(), 20.0)]
        );
    }

    #[test]
    fn edit_then_submit_replaces_in_place() {
        let mut ledger = Ledger::new();
        fill_form(&mut ledger, "50", "Coffee", "2024-01-05", "Food");
        let Ok(Submitted::Created(id)) = ledger.submit() else {
            panic!("expected the transaction to be created");
        };

        ledger.begin_edit(id).unwrap();
        ledger.form_mut().set_amount("65");
        let result = ledger.submit();

        assert_eq!(result, Ok(Submitted::Updated(id)));
        assert_eq!(ledger.store().len(), 1);
        assert_eq!(
            ledger.store().get(0).unwrap().transaction,
            Transaction::new(65.0, "Coffee", date!(2024 - 01 - 05), Category::Food)
        );
        assert_eq!(ledger.form().editing(), None);
    }

    #[test]
    fn deleting_only_transaction_zeroes_category_totals() {
        let mut ledger = Ledger::with_transactions([Transaction::new(
            50.0,
            "Coffee",
            date!(2024 - 01 - 05),
            Category::Food,
        )]);
        let id = ledger.store().get(0).unwrap().id;

        ledger.delete(id).unwrap();

        assert_eq!(ledger.store().len(), 0);
        assert!(ledger.category_totals().iter().all(|total| total.value == 0.0));
        assert!(ledger.month_totals().is_empty());
    }

    #[test]
    fn deleting_transaction_being_edited_returns_form_to_idle() {
        let mut ledger = Ledger::with_transactions([
            Transaction::new(3.0, "Bus", date!(2024 - 01 - 02), Category::Transport),
            Transaction::new(9.0, "Movie", date!(2024 - 01 - 03), Category::Entertainment),
        ]);
        let bus = ledger.store().get(0).unwrap().id;
        ledger.begin_edit(bus).unwrap();

        ledger.delete(bus).unwrap();

        assert!(!ledger.form().is_editing());
        assert_eq!(ledger.form().description(), "Bus");
        assert_eq!(ledger.submit(), Ok(Submitted::Created(3)));
        assert_eq!(ledger.store().len(), 2);
    }

    #[test]
    fn deleting_other_transaction_keeps_edit_target() {
        let mut ledger = Ledger::with_transactions([
            Transaction::new(3.0, "Bus", date!(2024 - 01 - 02), Category::Transport),
            Transaction::new(9.0, "Movie", date!(2024 - 01 - 03), Category::Entertainment),
        ]);
        let bus = ledger.store().get(0).unwrap().id;
        let movie = ledger.store().get(1).unwrap().id;
        ledger.begin_edit(movie).unwrap();

        ledger.delete(bus).unwrap();
        ledger.form_mut().set_amount("11");

        assert_eq!(ledger.submit(), Ok(Submitted::Updated(movie)));
        assert_eq!(ledger.store().get(0).unwrap().transaction.amount, 11.0);
    }

    #[test]
    fn delete_missing_transaction_fails() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.delete(1), Err(Error::TransactionNotFound(1)));
    }

    #[test]
    fn summary_reflects_ledger() {
        let mut ledger = Ledger::with_transactions([Transaction::new(
            50.0,
            "Coffee",
            date!(2024 - 01 - 05),
            Category::Food,
        )]);
        ledger.begin_edit(1).unwrap();

        let summary = ledger.summary();

        assert_eq!(summary.categories, Category::ALL.to_vec());
        assert_eq!(summary.transactions.len(), 1);
        assert_eq!(summary.category_totals[0].value, 50.0);
        assert_eq!(summary.month_totals[0].month, "Jan");
        assert_eq!(summary.editing, Some(1));
    }

    #[test]
    fn poisoned_lock_is_an_error() {
        let ledger = Arc::new(Mutex::new(Ledger::new()));
        let poisoner = ledger.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(lock_ledger(&ledger).err(), Some(Error::LockError));
    }
}
