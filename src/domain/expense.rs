use serde::{Deserialize, Serialize};

use super::{format_amount, Cents};

/// One recorded transaction: a category label and an amount.
/// Expenses are immutable once created; a correction is a delete plus a new
/// entry, never an edit in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-form category text, kept exactly as entered (may be empty)
    pub category: String,
    /// Amount in cents (signed)
    pub amount_cents: Cents,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount_cents: Cents) -> Self {
        Self {
            category: category.into(),
            amount_cents,
        }
    }

    /// The display line used by the ledger's list projection.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.category, format_amount(self.amount_cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_joins_category_and_amount() {
        let expense = Expense::new("Food", 1000);
        assert_eq!(expense.display_line(), "Food: 10.00");
    }

    #[test]
    fn empty_category_is_kept_as_is() {
        let expense = Expense::new("", 250);
        assert_eq!(expense.category, "");
        assert_eq!(expense.display_line(), ": 2.50");
    }
}
