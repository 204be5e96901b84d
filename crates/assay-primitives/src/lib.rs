pub mod currency;
pub mod symbol;

pub use currency::{
    Amount, Currency, CurrencyCode, Money, ParseCurrencyCodeError, Price, Quantity,
};
pub use symbol::{TickerSymbol, TickerSymbolError};
