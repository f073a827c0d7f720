use thiserror::Error;

use crate::domain::ParseAmountError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No expense selected")]
    NoSelection,
}

impl From<ParseAmountError> for AppError {
    fn from(err: ParseAmountError) -> Self {
        AppError::InvalidAmount(err.input)
    }
}
