use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_LEN: usize = 16;

#[derive(Error, Debug, PartialEq)]
pub enum TickerSymbolError {
    #[error("Empty Ticker Symbol")]
    Empty,

    #[error("Ticker Symbol Too Long: {0:?} (max 16 bytes)")]
    TooLong(String),

    #[error("Invalid Ticker Symbol: {0:?} (printable ASCII only)")]
    InvalidCharacter(String),
}

/// Exchange ticker of an instrument, e.g. `BAS.DE` or `AAPL`.
///
/// Stored inline and upper-cased; surrounding whitespace is trimmed. Input
/// that does not fit is rejected rather than shortened.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickerSymbol([u8; MAX_LEN]);

impl TickerSymbol {
    pub fn new(s: &str) -> Result<Self, TickerSymbolError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TickerSymbolError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(TickerSymbolError::InvalidCharacter(s.to_owned()));
        }
        if s.len() > MAX_LEN {
            return Err(TickerSymbolError::TooLong(s.to_owned()));
        }

        let mut bytes = [0u8; MAX_LEN];
        for (dst, b) in bytes.iter_mut().zip(s.bytes()) {
            *dst = b.to_ascii_uppercase();
        }
        Ok(Self(bytes))
    }

    pub fn as_str(&self) -> &str {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(MAX_LEN);
        // Constructors only write printable ASCII.
        std::str::from_utf8(&self.0[..len]).unwrap_or("")
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TickerSymbol({:?})", self.as_str())
    }
}

impl FromStr for TickerSymbol {
    type Err = TickerSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TickerSymbol {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TickerSymbol {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
