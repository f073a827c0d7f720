mod amount;
mod expense;
mod ledger;

pub use amount::*;
pub use expense::*;
pub use ledger::*;
