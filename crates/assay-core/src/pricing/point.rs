use std::{fmt, str::FromStr};

use assay_primitives::Price;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single archived price observation.
///
/// Points are keyed by `date`: a series holds at most one point per day and
/// orders, replaces and removes points by date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: Price) -> Self {
        Self { date, price }
    }

    pub fn zero(date: NaiveDate) -> Self {
        Self::new(date, Price::ZERO)
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.date, self.price)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ParsePricePointError {
    #[error("expected DATE=PRICE, got {0:?}")]
    MissingSeparator(String),

    #[error("invalid date {0:?}: {1}")]
    InvalidDate(String, chrono::ParseError),

    #[error("invalid price {0:?}: {1}")]
    InvalidPrice(String, rust_decimal::Error),
}

/// Parses `YYYY-MM-DD=PRICE`, e.g. `2020-01-02=101.50`.
impl FromStr for PricePoint {
    type Err = ParsePricePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, price) = s
            .split_once('=')
            .ok_or_else(|| ParsePricePointError::MissingSeparator(s.to_owned()))?;
        let (date, price) = (date.trim(), price.trim());

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| ParsePricePointError::InvalidDate(date.to_owned(), e))?;
        let price = Decimal::from_str(price)
            .map_err(|e| ParsePricePointError::InvalidPrice(price.to_owned(), e))?;

        Ok(Self::new(date, Price::from(price)))
    }
}

/// The most recently fetched quote for an instrument.
///
/// Kept apart from the archived history: a series holds at most one live
/// quote and never folds it into its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiveQuote {
    pub date: NaiveDate,
    pub price: Price,
}

impl LiveQuote {
    pub fn new(date: NaiveDate, price: Price) -> Self {
        Self { date, price }
    }

    pub fn point(&self) -> PricePoint {
        PricePoint::new(self.date, self.price)
    }
}

impl From<LiveQuote> for PricePoint {
    fn from(q: LiveQuote) -> Self {
        q.point()
    }
}

impl From<PricePoint> for LiveQuote {
    fn from(p: PricePoint) -> Self {
        Self::new(p.date, p.price)
    }
}

impl fmt::Display for LiveQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} (live)", self.date, self.price)
    }
}
