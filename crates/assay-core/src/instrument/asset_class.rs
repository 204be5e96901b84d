use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Cash,
    Debt,
    Equity,
    RealEstate,
    Commodity,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => f.write_str("cash"),
            Self::Debt => f.write_str("debt"),
            Self::Equity => f.write_str("equity"),
            Self::RealEstate => f.write_str("real_estate"),
            Self::Commodity => f.write_str("commodity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn test_asset_class_display() {
        assert_eq!(AssetClass::RealEstate.to_string(), "real_estate");
        assert_eq!(AssetClass::Equity.to_string(), "equity");
    }

    #[test]
    fn test_asset_class_serialization() -> Result<()> {
        assert_eq!(serde_json::to_string(&AssetClass::RealEstate)?, r#""REAL_ESTATE""#);
        let back: AssetClass = serde_json::from_str(r#""COMMODITY""#)?;
        assert_eq!(back, AssetClass::Commodity);
        Ok(())
    }
}
