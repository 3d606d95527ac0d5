//! Transaction data aggregation for the dashboard charts.
//!
//! Both views are recomputed from the full list of transactions on every
//! render, there is no cached state to invalidate.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::{category::Category, transaction::Transaction};

/// The total amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category.
    pub name: Category,
    /// The sum of the amounts of the transactions in the category.
    pub value: f64,
}

/// The total amount spent in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    /// The three-letter month abbreviation, e.g. "Jan".
    pub month: String,
    /// The sum of the amounts of the transactions in the month.
    pub expense: f64,
}

/// Sums transaction amounts by category.
///
/// # Returns
/// One total per category in [Category::ALL] order. Categories without any
/// transactions are included with a total of zero.
pub(crate) fn category_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<CategoryTotal> {
    let mut totals = [0.0; Category::ALL.len()];

    for transaction in transactions {
        totals[transaction.category.index()] += transaction.amount;
    }

    Category::ALL
        .into_iter()
        .zip(totals)
        .map(|(name, value)| CategoryTotal { name, value })
        .collect()
}

/// Sums transaction amounts by month label.
///
/// Months are labelled by their abbreviation only, so transactions from the
/// same month in different years share a total.
///
/// # Returns
/// One total per month label, in the order each label first appears in
/// `transactions`.
pub(crate) fn month_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<MonthTotal> {
    let mut totals: Vec<MonthTotal> = Vec::new();

    for transaction in transactions {
        let month = month_label(transaction.date);

        match totals.iter_mut().find(|total| total.month == month) {
            Some(total) => total.expense += transaction.amount,
            None => totals.push(MonthTotal {
                month: month.to_owned(),
                expense: transaction.amount,
            }),
        }
    }

    totals
}

/// The three-letter abbreviation of the month of `date`, e.g. "Jan".
fn month_label(date: Date) -> &'static str {
    match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
