mod common;

use anyhow::Result;
use common::session_with;
use spesa::application::LedgerSession;

#[test]
fn render_text_matches_the_summary_block() {
    let session = session_with(&[("Food", "10.0"), ("Food", "5.0"), ("Transport", "3.0")]);

    let text = session.spending_report().render_text();

    assert_eq!(
        text,
        "Expense Summary:\nFood: 15.00\nTransport: 3.00\nTotal Spending: 18.00"
    );
}

#[test]
fn render_text_on_an_empty_session() {
    let text = LedgerSession::new().spending_report().render_text();
    assert_eq!(text, "Expense Summary:\nTotal Spending: 0.00");
}

#[test]
fn categories_render_in_sorted_order() {
    let session = session_with(&[("Transport", "3"), ("Books", "2"), ("Food", "10")]);

    let report = session.spending_report();

    let order: Vec<&str> = report
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(order, vec!["Books", "Food", "Transport"]);
}

#[test]
fn json_report_carries_categories_and_total() -> Result<()> {
    let session = session_with(&[("Food", "10"), ("Transport", "3")]);

    let value = serde_json::to_value(session.spending_report())?;

    assert_eq!(value["total"], 1300);
    assert_eq!(value["categories"][0]["category"], "Food");
    assert_eq!(value["categories"][0]["total"], 1000);
    assert_eq!(value["categories"][1]["category"], "Transport");
    assert_eq!(value["categories"][1]["total"], 300);
    Ok(())
}
