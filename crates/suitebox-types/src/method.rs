//! Shipping method types
//!
//! Two distinct method enums exist and are not interchangeable:
//! [`ShippingMethod`] is the four-method enum used by the tiered, rate-table
//! driven pricing of consolidation and rate quotes; [`FreightMethod`] is the
//! two-method enum used by the standalone package-forwarding path with its
//! region-multiplier pricing.

use serde::{Deserialize, Serialize};

/// Shipping methods for consolidated shipments (tiered rate model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    /// Express air freight
    AirExpress,
    /// Economy air freight
    AirEconomy,
    /// Sea freight, less-than-container-load
    SeaLcl,
    /// Sea freight, full-container-load (custom quote)
    SeaFcl,
}

impl ShippingMethod {
    /// All canonical methods, in rate-card order
    pub const ALL: [Self; 4] = [Self::AirExpress, Self::AirEconomy, Self::SeaLcl, Self::SeaFcl];

    /// Quoted delivery window for this method
    pub const fn delivery_window(&self) -> &'static str {
        match self {
            Self::AirExpress => "3-5 business days",
            Self::AirEconomy => "7-10 business days",
            Self::SeaLcl => "30-45 days",
            Self::SeaFcl => "30-60 days",
        }
    }

    /// Wire name of this method
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AirExpress => "air_express",
            Self::AirEconomy => "air_economy",
            Self::SeaLcl => "sea_lcl",
            Self::SeaFcl => "sea_fcl",
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "air_express" => Ok(Self::AirExpress),
            "air_economy" => Ok(Self::AirEconomy),
            "sea_lcl" => Ok(Self::SeaLcl),
            "sea_fcl" => Ok(Self::SeaFcl),
            _ => Err(MethodParseError(s.to_string())),
        }
    }
}

/// Shipping methods for single-package forwarding (region-multiplier model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreightMethod {
    /// Air freight, ~7 day transit
    AirFreight,
    /// Sea freight, ~30 day transit
    SeaFreight,
}

impl FreightMethod {
    /// Base rate per kilogram in USD
    pub const fn base_rate_per_kg(&self) -> f64 {
        match self {
            Self::AirFreight => 15.0,
            Self::SeaFreight => 5.0,
        }
    }

    /// Transit time in days used for delivery estimates
    pub const fn transit_days(&self) -> i64 {
        match self {
            Self::AirFreight => 7,
            Self::SeaFreight => 30,
        }
    }

    /// Wire name of this method
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AirFreight => "AIR_FREIGHT",
            Self::SeaFreight => "SEA_FREIGHT",
        }
    }
}

impl std::fmt::Display for FreightMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FreightMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AIR_FREIGHT" => Ok(Self::AirFreight),
            "SEA_FREIGHT" => Ok(Self::SeaFreight),
            _ => Err(MethodParseError(s.to_string())),
        }
    }
}

/// Error parsing a shipping method string
#[derive(Debug, Clone)]
pub struct MethodParseError(pub String);

impl std::fmt::Display for MethodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid shipping method: {}", self.0)
    }
}

impl std::error::Error for MethodParseError {}
