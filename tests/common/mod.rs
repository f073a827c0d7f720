// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use spesa::application::LedgerSession;

/// Build a session preloaded with (category, amount text) pairs.
pub fn session_with(entries: &[(&str, &str)]) -> LedgerSession {
    let mut session = LedgerSession::new();
    for (category, amount) in entries {
        session
            .add_expense(*category, amount)
            .expect("test entries must parse");
    }
    session
}
