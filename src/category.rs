//! The fixed set of categories used to classify transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A label for grouping transactions in the category breakdown.
///
/// The set of categories is closed. [Category::ALL] lists every category in
/// display order, which is also the order of the category totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, eating out and coffee.
    Food,
    /// Fuel, fares and parking.
    Transport,
    /// Movies, games and concerts.
    Entertainment,
    /// Rent, power, phone and other regular bills.
    Bills,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Other,
    ];

    /// The name of the category as shown to the user.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// The position of the category in [Category::ALL].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Parse the category field of a form, where an empty string means no
    /// category has been selected yet.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCategory] if `text` is neither empty nor the name
    /// of a category.
    pub fn parse_optional(text: &str) -> Result<Option<Self>, Error> {
        if text.trim().is_empty() {
            Ok(None)
        } else {
            text.parse().map(Some)
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| Error::InvalidCategory(s.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
