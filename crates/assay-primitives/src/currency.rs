use std::{fmt, ops::Mul, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Invalid Currency Code: {0:?} (expected three ASCII letters)")]
pub struct ParseCurrencyCodeError(pub String);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Builds an ISO-4217 style code. Input is upper-cased and truncated to
    /// three bytes; non-ASCII bytes are dropped.
    pub fn new(code: &str) -> Self {
        let mut bytes = [0u8; 3];
        for (dst, src) in bytes
            .iter_mut()
            .zip(code.bytes().filter(u8::is_ascii_alphanumeric))
        {
            *dst = src.to_ascii_uppercase();
        }
        Self(bytes)
    }

    pub fn as_str(&self) -> &str {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(3);
        // Constructors only ever write ASCII alphanumerics.
        std::str::from_utf8(&self.0[..len]).unwrap_or("")
    }
}

/// Strict parsing for user input: exactly three ASCII letters, any case.
impl FromStr for CurrencyCode {
    type Err = ParseCurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self::new(trimmed))
        } else {
            Err(ParseCurrencyCodeError(s.to_owned()))
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({:?})", self.as_str())
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Ok(Self::new(&s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub decimals: u8,
}

impl Currency {
    pub fn new(code: &str, decimals: u8) -> Self {
        Self {
            code: CurrencyCode::new(code),
            decimals,
        }
    }

    pub fn eur() -> Self {
        Self::new("EUR", 2)
    }

    pub fn usd() -> Self {
        Self::new("USD", 2)
    }

    /// Infers minor-unit precision from the code. Everything not listed uses
    /// two decimals.
    pub fn from_code(code: CurrencyCode) -> Self {
        let decimals = match code.as_str() {
            "JPY" | "KRW" | "ISK" => 0,
            "BHD" | "KWD" | "OMR" | "TND" => 3,
            _ => 2,
        };
        Self { code, decimals }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A cash amount. Never negative on ledger records; the sign is carried by
/// the transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub fn is_sign_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Decimal> for Amount {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl From<Amount> for Decimal {
    fn from(a: Amount) -> Self {
        a.0
    }
}

/// Quoted price of one unit of an instrument.
///
/// Backed by a fixed-point [`Decimal`], so prices round-trip through
/// storage and arithmetic without float drift. A zero price is a valid
/// value; whether it means "unknown" is decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl From<Price> for Decimal {
    fn from(p: Price) -> Self {
        p.0
    }
}

/// Number of shares (or units) of an instrument. Fractional holdings are
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Decimal> for Quantity {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl From<Quantity> for Decimal {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl Mul<Price> for Quantity {
    type Output = Amount;

    fn mul(self, rhs: Price) -> Amount {
        Amount(self.0 * rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Amount,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Amount, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = u32::from(self.currency.decimals);
        let rounded = Decimal::from(self.amount).round_dp(scale);
        let prec = usize::from(self.currency.decimals);
        write!(f, "{rounded:.prec$} {}", self.currency)
    }
}
