//! The form controller: the field values the user is editing and the
//! transaction, if any, they will overwrite on submit.

use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    alert::Alert,
    category::Category,
    transaction::{Transaction, TransactionId, TransactionStore},
};

/// The format produced by `<input type="date">`.
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A field of the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Field {
    Amount,
    Description,
    Date,
    Category,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Amount => "amount",
            Field::Description => "description",
            Field::Date => "date",
            Field::Category => "category",
        };

        f.write_str(name)
    }
}

/// The reasons a form submission can be turned away.
///
/// A rejected submission leaves both the store and the form fields untouched.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Rejection {
    /// A required field was left empty.
    #[error("the {0} field is required")]
    MissingField(Field),

    /// The amount is not a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The date is not a calendar date in the format YYYY-MM-DD.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The transaction being edited was removed before the edit was submitted.
    #[error("transaction {0} was removed while it was being edited")]
    EditTargetMissing(TransactionId),
}

impl Rejection {
    /// Convert the rejection into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = match self {
            Rejection::EditTargetMissing(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        let details = match &self {
            Rejection::MissingField(field) => format!("Fill in the {field} and try again."),
            Rejection::InvalidAmount(text) => {
                format!("\"{text}\" is not a number. Enter an amount such as 12.50.")
            }
            Rejection::InvalidDate(text) => {
                format!("\"{text}\" is not a date. Pick a date from the date picker.")
            }
            Rejection::EditTargetMissing(_) => "The transaction you were editing has been \
                deleted. Submit again to add it as a new transaction."
                .to_owned(),
        };

        let alert = Alert::Error {
            message: "Could not save transaction".to_owned(),
            details,
        };

        (status_code, alert.into_html()).into_response()
    }
}

/// What a successful submission did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// A new transaction was appended with this ID.
    Created(TransactionId),
    /// The transaction with this ID was replaced.
    Updated(TransactionId),
}

/// Holds the values of the transaction form between requests.
///
/// The controller is either idle, where submitting appends a new transaction,
/// or editing a transaction, where submitting replaces that transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    amount: String,
    description: String,
    date: String,
    category: Option<Category>,
    editing: Option<TransactionId>,
}

impl FormController {
    /// Create an idle controller with empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// The amount as typed by the user.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The description as typed by the user.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The date as typed by the user.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The selected category, if any.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The ID of the transaction that the next submit will overwrite.
    pub fn editing(&self) -> Option<TransactionId> {
        self.editing
    }

    /// Whether the next submit replaces an existing transaction.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Replace the amount field.
    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_owned();
    }

    /// Replace the description field.
    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    /// Replace the date field.
    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_owned();
    }

    /// Replace the selected category.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Load the transaction with the ID `id` into the form and switch to
    /// editing it.
    ///
    /// Any unsaved changes to the fields are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if `store` has no transaction with
    /// the ID `id`. The form is left unchanged.
    pub fn begin_edit(&mut self, id: TransactionId, store: &TransactionStore) -> Result<(), Error> {
        let transaction = store.find(id).ok_or(Error::TransactionNotFound(id))?;

        self.amount = transaction.amount.to_string();
        self.description = transaction.description.clone();
        self.date = transaction.date.to_string();
        self.category = Some(transaction.category);
        self.editing = Some(id);

        Ok(())
    }

    /// Leave edit mode without saving and clear the fields.
    pub fn cancel_edit(&mut self) {
        self.clear();
    }

    /// Stop editing but keep the field values, so they can still be submitted
    /// as a new transaction.
    pub(crate) fn detach(&mut self) {
        self.editing = None;
    }

    /// Validate the fields and save them to `store`.
    ///
    /// When idle the transaction is appended; when editing it replaces the
    /// transaction being edited. On success the fields are cleared and the
    /// controller returns to idle.
    ///
    /// # Errors
    ///
    /// Returns a [Rejection] if a field is empty, the amount is not a finite
    /// number, the date is not a valid date, or the transaction being edited
    /// is no longer in `store`. In the last case the controller stops editing
    /// but keeps the fields.
    pub fn submit(&mut self, store: &mut TransactionStore) -> Result<Submitted, Rejection> {
        let transaction = self.validate()?;

        let submitted = match self.editing {
            Some(id) => {
                if store.replace(id, transaction).is_err() {
                    self.detach();
                    return Err(Rejection::EditTargetMissing(id));
                }

                Submitted::Updated(id)
            }
            None => Submitted::Created(store.append(transaction)),
        };

        self.clear();

        Ok(submitted)
    }

    fn validate(&self) -> Result<Transaction, Rejection> {
        let amount = required(&self.amount, Field::Amount)?;
        required(&self.description, Field::Description)?;
        let date = required(&self.date, Field::Date)?;
        let category = self
            .category
            .ok_or(Rejection::MissingField(Field::Category))?;

        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;

        Ok(Transaction::new(amount, &self.description, date, category))
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(text: &str, field: Field) -> Result<&str, Rejection> {
    let text = text.trim();

    if text.is_empty() {
        Err(Rejection::MissingField(field))
    } else {
        Ok(text)
    }
}

fn parse_amount(text: &str) -> Result<f64, Rejection> {
    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Rejection::InvalidAmount(text.to_owned()))
}

fn parse_date(text: &str) -> Result<Date, Rejection> {
    Date::parse(text, DATE_FORMAT).map_err(|_| Rejection::InvalidDate(text.to_owned()))
}
