//! Subscription tier types

use serde::{Deserialize, Serialize};

/// Subscription tier levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free tier - $5.00 consolidation fee per shipment
    Free,
    /// Standard tier - $3.00 consolidation fee per shipment
    Standard,
    /// Premium tier - consolidation included
    Premium,
}

impl SubscriptionTier {
    /// Consolidation fee in USD charged per consolidation event
    pub const fn consolidation_fee_usd(&self) -> f64 {
        match self {
            Self::Free => 5.00,
            Self::Standard => 3.00,
            Self::Premium => 0.00,
        }
    }

    /// Parse a stored tier string, falling back to the free tier for
    /// unknown or legacy values
    pub fn from_str_or_free(s: &str) -> Self {
        s.parse().unwrap_or(Self::Free)
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Standard => write!(f, "standard"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for SubscriptionTier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

/// Error parsing a tier string
#[derive(Debug, Clone)]
pub struct TierParseError(pub String);

impl std::fmt::Display for TierParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid tier: {}", self.0)
    }
}

impl std::error::Error for TierParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fees_by_tier() {
        assert_eq!(SubscriptionTier::Free.consolidation_fee_usd(), 5.00);
        assert_eq!(SubscriptionTier::Standard.consolidation_fee_usd(), 3.00);
        assert_eq!(SubscriptionTier::Premium.consolidation_fee_usd(), 0.00);
    }

    #[test]
    fn unknown_tier_falls_back_to_free() {
        assert_eq!(SubscriptionTier::from_str_or_free("gold"), SubscriptionTier::Free);
        assert_eq!(SubscriptionTier::from_str_or_free(""), SubscriptionTier::Free);
        assert_eq!(
            SubscriptionTier::from_str_or_free("PREMIUM"),
            SubscriptionTier::Premium
        );
    }
}
