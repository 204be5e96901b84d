pub mod account;
pub mod client;
pub mod error;
pub mod transaction;

pub use account::{Account, Portfolio};
pub use client::Client;
pub use error::AccountingError;
pub use transaction::{
    AccountTransaction, AccountTransactionType, InstrumentTransaction, PortfolioTransaction,
    PortfolioTransactionType, Relevance,
};
