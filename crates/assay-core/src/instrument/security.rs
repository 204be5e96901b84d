use std::fmt;

use assay_primitives::{Amount, Quantity, TickerSymbol};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    accounting::{Client, InstrumentTransaction},
    instrument::AssetClass,
    pricing::{LiveQuote, PricePoint, PriceSeries},
};

/// A tradable security and its price series.
///
/// Identity is `id`. Two instruments with equal attributes are still
/// different instruments; ledger records reference instruments by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub id: Uuid,
    pub name: String,
    pub isin: Option<String>,
    pub ticker_symbol: Option<TickerSymbol>,
    pub asset_class: Option<AssetClass>,
    pub industry_classification: Option<String>,
    /// Identifier of the price feed the instrument is updated from.
    pub feed: Option<String>,
    prices: PriceSeries,
}

impl Instrument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            isin: None,
            ticker_symbol: None,
            asset_class: None,
            industry_classification: None,
            feed: None,
            prices: PriceSeries::new(),
        }
    }

    #[must_use]
    pub fn with_isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    #[must_use]
    pub fn with_ticker_symbol(mut self, ticker: TickerSymbol) -> Self {
        self.ticker_symbol = Some(ticker);
        self
    }

    #[must_use]
    pub fn with_asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_class = Some(asset_class);
        self
    }

    #[must_use]
    pub fn with_industry_classification(mut self, classification: impl Into<String>) -> Self {
        self.industry_classification = Some(classification.into());
        self
    }

    #[must_use]
    pub fn with_feed(mut self, feed: impl Into<String>) -> Self {
        self.feed = Some(feed.into());
        self
    }

    pub fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    pub fn prices_mut(&mut self) -> &mut PriceSeries {
        &mut self.prices
    }

    pub fn add_price(&mut self, point: PricePoint) {
        self.prices.insert(point);
    }

    pub fn remove_price(&mut self, point: &PricePoint) -> Option<PricePoint> {
        self.prices.remove(point)
    }

    pub fn remove_all_prices(&mut self) {
        self.prices.clear();
    }

    pub fn latest(&self) -> Option<&LiveQuote> {
        self.prices.live()
    }

    pub fn set_latest(&mut self, quote: Option<LiveQuote>) {
        self.prices.set_live(quote);
    }

    pub fn price_at(&self, at: NaiveDate) -> Option<PricePoint> {
        self.prices.query(at)
    }

    pub fn price_at_or_zero(&self, at: NaiveDate) -> PricePoint {
        self.prices.query_or_zero(at)
    }

    /// Market value of `shares` on `at`, or `None` if the instrument has
    /// never been priced.
    pub fn valuation(&self, shares: Quantity, at: NaiveDate) -> Option<Amount> {
        self.price_at(at).map(|p| shares * p.price)
    }

    /// Dividends, interest and share movements of this instrument across
    /// all of `client`'s accounts and portfolios.
    pub fn transactions<'a>(&self, client: &'a Client) -> Vec<InstrumentTransaction<'a>> {
        client.transactions_for(self)
    }

    /// A new instrument with the same attributes and prices under a fresh
    /// identity. The history is copied; the live quote is carried over as is.
    ///
    /// Use `clone` instead to keep the identity.
    pub fn deep_copy(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            isin: self.isin.clone(),
            ticker_symbol: self.ticker_symbol,
            asset_class: self.asset_class,
            industry_classification: self.industry_classification.clone(),
            feed: self.feed.clone(),
            prices: self.prices.deep_copy(),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
