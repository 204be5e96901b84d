use std::fmt;

use assay_primitives::{Money, Quantity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{accounting::AccountingError, instrument::Instrument};

/// How a transaction relates to the instrument it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    /// Cash flow earned by holding the instrument (interest, dividends).
    Income,
    /// Changes the number of shares held.
    Position,
    /// Not part of the instrument's own history, even if it names it.
    Unrelated,
}

impl Relevance {
    pub fn is_related(self) -> bool {
        !matches!(self, Self::Unrelated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountTransactionType {
    Deposit,
    Removal,
    Interest,
    Dividends,
    Fees,
    Taxes,
    Buy,
    Sell,
    TransferIn,
    TransferOut,
}

impl AccountTransactionType {
    /// Only income booked on a cash account belongs to an instrument. The
    /// cash leg of a trade is represented by its portfolio transaction.
    pub fn relevance(self) -> Relevance {
        match self {
            Self::Interest | Self::Dividends => Relevance::Income,
            Self::Deposit
            | Self::Removal
            | Self::Fees
            | Self::Taxes
            | Self::Buy
            | Self::Sell
            | Self::TransferIn
            | Self::TransferOut => Relevance::Unrelated,
        }
    }
}

impl fmt::Display for AccountTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Deposit => "deposit",
            Self::Removal => "removal",
            Self::Interest => "interest",
            Self::Dividends => "dividends",
            Self::Fees => "fees",
            Self::Taxes => "taxes",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioTransactionType {
    Buy,
    Sell,
    TransferIn,
    TransferOut,
}

impl PortfolioTransactionType {
    pub fn relevance(self) -> Relevance {
        match self {
            Self::Buy | Self::Sell | Self::TransferIn | Self::TransferOut => Relevance::Position,
        }
    }
}

impl fmt::Display for PortfolioTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
        };
        f.write_str(s)
    }
}

/// A cash movement on an [`Account`](crate::accounting::Account).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: AccountTransactionType,
    pub amount: Money,
    pub instrument: Option<Uuid>,
}

impl AccountTransaction {
    pub fn new(
        date: NaiveDate,
        kind: AccountTransactionType,
        amount: Money,
    ) -> Result<Self, AccountingError> {
        if amount.amount.is_sign_negative() {
            return Err(AccountingError::InvalidAmount(
                "Transaction amounts must not be negative",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            kind,
            amount,
            instrument: None,
        })
    }

    /// Attributes the transaction to `instrument`, e.g. the payer of a
    /// dividend.
    #[must_use]
    pub fn with_instrument(mut self, instrument: &Instrument) -> Self {
        self.instrument = Some(instrument.id);
        self
    }

    pub fn relevance(&self) -> Relevance {
        self.kind.relevance()
    }
}

/// A change in the shares of one instrument held in a
/// [`Portfolio`](crate::accounting::Portfolio).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: PortfolioTransactionType,
    pub instrument: Uuid,
    pub shares: Quantity,
    pub amount: Money,
}

impl PortfolioTransaction {
    pub fn new(
        date: NaiveDate,
        kind: PortfolioTransactionType,
        instrument: &Instrument,
        shares: Quantity,
        amount: Money,
    ) -> Result<Self, AccountingError> {
        if !shares.is_positive() {
            return Err(AccountingError::InvalidShares(shares));
        }
        if amount.amount.is_sign_negative() {
            return Err(AccountingError::InvalidAmount(
                "Transaction amounts must not be negative",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            kind,
            instrument: instrument.id,
            shares,
            amount,
        })
    }

    pub fn relevance(&self) -> Relevance {
        self.kind.relevance()
    }
}

/// A transaction found while collecting an instrument's history, borrowed
/// from the account or portfolio that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentTransaction<'a> {
    Account(&'a AccountTransaction),
    Portfolio(&'a PortfolioTransaction),
}

impl InstrumentTransaction<'_> {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Account(t) => t.id,
            Self::Portfolio(t) => t.id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Account(t) => t.date,
            Self::Portfolio(t) => t.date,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Account(t) => t.amount,
            Self::Portfolio(t) => t.amount,
        }
    }

    pub fn relevance(&self) -> Relevance {
        match self {
            Self::Account(t) => t.relevance(),
            Self::Portfolio(t) => t.relevance(),
        }
    }
}
