use assay_primitives::Currency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounting::{AccountTransaction, AccountingError, PortfolioTransaction};

/// A cash account. Every transaction booked on it is in the account's
/// currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub currency: Currency,
    transactions: Vec<AccountTransaction>,
}

impl Account {
    pub fn new(name: String, currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            currency,
            transactions: Vec::new(),
        }
    }

    pub fn add_transaction(&mut self, tx: AccountTransaction) -> Result<(), AccountingError> {
        if tx.amount.currency != self.currency {
            return Err(AccountingError::CurrencyMismatch(
                tx.amount.currency.to_string(),
                self.currency.to_string(),
            ));
        }
        self.transactions.push(tx);
        Ok(())
    }

    /// Transactions in booking order.
    pub fn transactions(&self) -> &[AccountTransaction] {
        &self.transactions
    }
}

/// A securities account holding shares of instruments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub name: String,
    transactions: Vec<PortfolioTransaction>,
}

impl Portfolio {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            transactions: Vec::new(),
        }
    }

    pub fn add_transaction(&mut self, tx: PortfolioTransaction) {
        self.transactions.push(tx);
    }

    pub fn transactions(&self) -> &[PortfolioTransaction] {
        &self.transactions
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, Result};
    use assay_primitives::{Amount, Money, Quantity};
    use chrono::NaiveDate;
    use rust_decimal::dec;

    use super::*;
    use crate::{
        accounting::{AccountTransactionType, PortfolioTransactionType},
        instrument::Instrument,
    };

    fn day(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d).context("invalid test date")
    }

    #[test]
    fn test_account_creation() {
        let account = Account::new("Broker Cash".into(), Currency::eur());

        assert_eq!(account.name, "Broker Cash");
        assert_eq!(account.currency, Currency::eur());
        assert!(account.transactions().is_empty());
        assert!(!account.id.is_nil());
    }

    #[test]
    fn test_account_ids_are_unique() {
        let a1 = Account::new("Cash".into(), Currency::eur());
        let a2 = Account::new("Cash".into(), Currency::eur());
        assert_ne!(a1.id, a2.id);
        assert_ne!(a1, a2);
    }

    #[test]
    fn test_account_add_transaction_keeps_booking_order() -> Result<()> {
        let mut account = Account::new("Cash".into(), Currency::eur());
        let deposit = AccountTransaction::new(
            day(2020, 2, 1)?,
            AccountTransactionType::Deposit,
            Money::new(Amount::from(dec!(1000)), Currency::eur()),
        )?;
        let fees = AccountTransaction::new(
            day(2020, 1, 1)?,
            AccountTransactionType::Fees,
            Money::new(Amount::from(dec!(5)), Currency::eur()),
        )?;

        account.add_transaction(deposit.clone())?;
        account.add_transaction(fees.clone())?;

        assert_eq!(account.transactions(), [deposit, fees].as_slice());
        Ok(())
    }

    #[test]
    fn test_account_rejects_foreign_currency() -> Result<()> {
        let mut account = Account::new("Cash".into(), Currency::eur());
        let tx = AccountTransaction::new(
            day(2020, 2, 1)?,
            AccountTransactionType::Deposit,
            Money::new(Amount::from(dec!(10)), Currency::usd()),
        )?;

        let err = account.add_transaction(tx);
        assert_eq!(
            err,
            Err(AccountingError::CurrencyMismatch("USD".into(), "EUR".into()))
        );
        assert!(account.transactions().is_empty());
        Ok(())
    }

    #[test]
    fn test_portfolio_add_transaction() -> Result<()> {
        let basf = Instrument::new("BASF SE");
        let mut portfolio = Portfolio::new("Depot".into());
        let buy = PortfolioTransaction::new(
            day(2020, 1, 2)?,
            PortfolioTransactionType::Buy,
            &basf,
            Quantity::from(dec!(10)),
            Money::new(Amount::from(dec!(650)), Currency::eur()),
        )?;

        portfolio.add_transaction(buy.clone());

        assert_eq!(portfolio.transactions().len(), 1);
        assert_eq!(portfolio.transactions()[0], buy);
        Ok(())
    }

    #[test]
    fn test_account_serialization() -> Result<()> {
        let acc = Account::new("Test Account".into(), Currency::usd());
        let json = serde_json::to_string(&acc).context("Failed to serialize Account")?;

        assert!(json.contains("Test Account"));
        assert!(json.contains("USD"));

        let back: Account = serde_json::from_str(&json).context("Failed to deserialize")?;
        assert_eq!(acc, back);
        Ok(())
    }
}
