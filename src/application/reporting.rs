use serde::{Deserialize, Serialize};

use crate::domain::{format_amount, Cents, Summary};

/// Per-category spending plus the grand total, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingReport {
    pub categories: Vec<CategoryTotal>,
    pub total: Cents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Cents,
}

impl SpendingReport {
    pub fn from_summary(summary: Summary) -> Self {
        let categories = summary
            .by_category
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        Self {
            categories,
            total: summary.total,
        }
    }

    /// Render the report as the summary block shown to the user.
    pub fn render_text(&self) -> String {
        let mut out = String::from("Expense Summary:\n");
        for line in &self.categories {
            out.push_str(&line.category);
            out.push_str(": ");
            out.push_str(&format_amount(line.total));
            out.push('\n');
        }
        out.push_str("Total Spending: ");
        out.push_str(&format_amount(self.total));
        out
    }
}
