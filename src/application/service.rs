use crate::domain::{parse_amount, Expense, Ledger};

use super::{AppError, SpendingReport};

/// Application service fronting the ledger for one process lifetime.
/// This is the primary interface for any client (CLI, TUI, etc.): it takes
/// caller-supplied input, maps bad input to typed errors, and hands back
/// state the client can render.
#[derive(Debug, Default)]
pub struct LedgerSession {
    ledger: Ledger,
}

impl LedgerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense. The amount arrives as text and must parse as a
    /// decimal number; on failure the ledger is left unchanged.
    pub fn add_expense(
        &mut self,
        category: impl Into<String>,
        amount: &str,
    ) -> Result<Expense, AppError> {
        let amount_cents = parse_amount(amount)?;
        let expense = Expense::new(category, amount_cents);
        self.ledger.add(expense.clone());
        Ok(expense)
    }

    /// Delete the expense at the selected position. `None` means nothing was
    /// selected; both that and an out-of-range position report
    /// `NoSelection` and leave the ledger unchanged.
    pub fn delete_expense(&mut self, selected: Option<usize>) -> Result<Expense, AppError> {
        let index = selected.ok_or(AppError::NoSelection)?;
        self.ledger.delete_at(index).ok_or(AppError::NoSelection)
    }

    pub fn entry_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn entries(&self) -> &[Expense] {
        self.ledger.entries()
    }

    pub fn list_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.ledger.list_view()
    }

    pub fn spending_report(&self) -> SpendingReport {
        SpendingReport::from_summary(self.ledger.summarize())
    }
}
