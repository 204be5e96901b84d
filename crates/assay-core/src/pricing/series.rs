use chrono::NaiveDate;
use tracing::{debug, instrument, trace};

use crate::pricing::{LiveQuote, PricePoint};

/// Where a resolved price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// An entry of the archived history.
    Archived(PricePoint),
    /// The live quote, either because the history is empty or because the
    /// requested date lies past the end of the history.
    Live(PricePoint),
    /// Neither history nor a live quote exist. Carries the requested date.
    Unpriced(NaiveDate),
}

impl Resolution {
    pub fn point(self) -> Option<PricePoint> {
        match self {
            Self::Archived(p) | Self::Live(p) => Some(p),
            Self::Unpriced(_) => None,
        }
    }

    /// The resolved point, or a zero price dated at the requested day.
    pub fn point_or_zero(self) -> PricePoint {
        match self {
            Self::Archived(p) | Self::Live(p) => p,
            Self::Unpriced(at) => PricePoint::zero(at),
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, Self::Live(_))
    }
}

/// Price history of one instrument plus an optional live quote.
///
/// `history` is kept strictly ascending by date with at most one point per
/// day. The live quote is an overlay: it is consulted by [`Self::resolve`]
/// but never merged into the history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSeries {
    history: Vec<PricePoint>,
    live: Option<LiveQuote>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archived points, oldest first.
    pub fn history(&self) -> &[PricePoint] {
        &self.history
    }

    pub fn live(&self) -> Option<&LiveQuote> {
        self.live.as_ref()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.history.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.history.last()
    }

    /// The archived point for exactly `date`, ignoring the live quote.
    pub fn get(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.position(date).ok().and_then(|idx| self.history.get(idx))
    }

    /// Adds `point`, replacing whatever is stored for the same date.
    #[instrument(skip_all, level = "debug", fields(date = %point.date, price = %point.price))]
    pub fn insert(&mut self, point: PricePoint) {
        match self.position(point.date) {
            Ok(idx) => {
                trace!(previous = %self.history[idx].price, "overwriting price");
                self.history[idx] = point;
            }
            Err(idx) => self.history.insert(idx, point),
        }
    }

    /// Removes the point stored at `point.date`; the price is not compared.
    pub fn remove(&mut self, point: &PricePoint) -> Option<PricePoint> {
        self.remove_at(point.date)
    }

    pub fn remove_at(&mut self, date: NaiveDate) -> Option<PricePoint> {
        let idx = self.position(date).ok()?;
        debug!(%date, "removing price");
        Some(self.history.remove(idx))
    }

    /// Drops the whole history. The live quote is kept.
    pub fn clear(&mut self) {
        debug!(count = self.history.len(), "clearing price history");
        self.history.clear();
    }

    pub fn set_live(&mut self, quote: Option<LiveQuote>) {
        trace!(?quote, "setting live quote");
        self.live = quote;
    }

    /// Resolves the price in effect on `at`.
    ///
    /// 1. Empty history: the live quote if any, else [`Resolution::Unpriced`].
    /// 2. A live quote exists and `at` is after the last archived day: the
    ///    live quote unless it is older than that last day, in which case the
    ///    last archived point.
    /// 3. Otherwise the archived point on `at`, else the closest one before
    ///    it, else (when `at` precedes the history) the earliest point.
    #[instrument(skip_all, level = "trace", fields(at = %at))]
    pub fn resolve(&self, at: NaiveDate) -> Resolution {
        let Some(last) = self.history.last() else {
            return match self.live {
                Some(quote) => Resolution::Live(quote.point()),
                None => Resolution::Unpriced(at),
            };
        };

        match self.live {
            Some(quote) if last.date < at => {
                if quote.date >= last.date {
                    return Resolution::Live(quote.point());
                }
                trace!(live = %quote.date, last = %last.date, "live quote is stale");
                return Resolution::Archived(*last);
            }
            _ => {}
        }

        let idx = match self.position(at) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        Resolution::Archived(self.history[idx])
    }

    /// Price in effect on `at`, or `None` if the series holds no data at all.
    pub fn query(&self, at: NaiveDate) -> Option<PricePoint> {
        self.resolve(at).point()
    }

    /// Like [`Self::query`], but an entirely empty series yields a zero price
    /// dated `at` instead of `None`. Callers must read a zero price as
    /// "unknown".
    pub fn query_or_zero(&self, at: NaiveDate) -> PricePoint {
        self.resolve(at).point_or_zero()
    }

    /// Copy with its own history. The live quote is shared by value.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    fn position(&self, date: NaiveDate) -> Result<usize, usize> {
        self.history.binary_search_by_key(&date, |p| p.date)
    }
}
