use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    accounting::{Account, InstrumentTransaction, Portfolio},
    instrument::Instrument,
};

/// The book of one investor: cash accounts and securities portfolios.
#[derive(Debug, Clone, Default)]
pub struct Client {
    accounts: Vec<Account>,
    portfolios: Vec<Portfolio>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn add_portfolio(&mut self, portfolio: Portfolio) {
        self.portfolios.push(portfolio);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn portfolios(&self) -> &[Portfolio] {
        &self.portfolios
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    pub fn portfolio_mut(&mut self, id: Uuid) -> Option<&mut Portfolio> {
        self.portfolios.iter_mut().find(|p| p.id == id)
    }

    /// Every transaction that belongs to `instrument`'s history: income
    /// booked on accounts first, then all share movements in portfolios.
    /// Within each group, accounts/portfolios and their transactions keep
    /// insertion order.
    ///
    /// Instruments are matched by identity (`id`), not by name.
    #[instrument(skip_all, level = "debug", fields(instrument = %instrument.name))]
    pub fn transactions_for(&self, instrument: &Instrument) -> Vec<InstrumentTransaction<'_>> {
        let id = instrument.id;

        let income = self
            .accounts
            .iter()
            .flat_map(Account::transactions)
            .filter(|t| t.instrument == Some(id) && t.relevance().is_related())
            .map(InstrumentTransaction::Account);

        let positions = self
            .portfolios
            .iter()
            .flat_map(Portfolio::transactions)
            .filter(|t| t.instrument == id && t.relevance().is_related())
            .map(InstrumentTransaction::Portfolio);

        let found: Vec<_> = income.chain(positions).collect();
        debug!(count = found.len(), "collected instrument transactions");
        found
    }
}
