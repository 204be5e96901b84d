use assay_primitives::Quantity;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AccountingError {
    #[error("Currency Mismatch: Cannot book {0} into an account held in {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid Amount: {0}")]
    InvalidAmount(&'static str),

    #[error("Invalid Shares: {0} (must be positive)")]
    InvalidShares(Quantity),
}
