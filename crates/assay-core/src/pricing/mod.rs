pub mod point;
pub mod series;

pub use point::{LiveQuote, ParsePricePointError, PricePoint};
pub use series::{PriceSeries, Resolution};
