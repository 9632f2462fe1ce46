//! Rate table resolution and tiered cost calculation
//!
//! Resolution order: the most specific configured rate row whose weight
//! band contains the total weight, then the compiled-in default for the
//! method. A missing row is never an error; sea FCL's zero per-pound rate
//! is a custom-quote sentinel, not a price.

use std::sync::Arc;

use suitebox_db::{RateRepository, RateRow};
use suitebox_types::ShippingMethod;

use crate::error::CoreError;

/// Upper bound on a quotable weight in pounds (tiered model)
pub const MAX_WEIGHT_LBS: f64 = 10_000.0;

/// A resolved shipping rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    /// Flat fee in USD
    pub base_fee: f64,
    /// Per-pound cost in USD
    pub cost_per_lb: f64,
}

impl ResolvedRate {
    /// Compiled-in default rate for a method, used whenever no configured
    /// row matches
    pub const fn default_for(method: ShippingMethod) -> Self {
        match method {
            ShippingMethod::AirExpress => Self { base_fee: 15.0, cost_per_lb: 8.0 },
            ShippingMethod::AirEconomy => Self { base_fee: 10.0, cost_per_lb: 5.0 },
            ShippingMethod::SeaLcl => Self { base_fee: 25.0, cost_per_lb: 2.0 },
            // FCL is custom quote; the zero rate is a sentinel
            ShippingMethod::SeaFcl => Self { base_fee: 500.0, cost_per_lb: 0.0 },
        }
    }
}

impl From<&RateRow> for ResolvedRate {
    fn from(row: &RateRow) -> Self {
        Self { base_fee: row.base_fee, cost_per_lb: row.cost_per_lb }
    }
}

/// Reject weights outside the quotable range (0, 10000] or non-finite
pub fn validate_weight(weight_lbs: f64) -> Result<(), CoreError> {
    if !weight_lbs.is_finite() || weight_lbs <= 0.0 || weight_lbs > MAX_WEIGHT_LBS {
        return Err(CoreError::InvalidWeight(weight_lbs));
    }
    Ok(())
}

/// Tiered shipping cost: base fee plus per-pound cost
pub fn tiered_cost(rate: &ResolvedRate, weight_lbs: f64) -> Result<f64, CoreError> {
    validate_weight(weight_lbs)?;
    Ok(rate.base_fee + weight_lbs * rate.cost_per_lb)
}

/// A full rate quote for the single-quote endpoint
#[derive(Debug, Clone)]
pub struct RateQuote {
    pub method: ShippingMethod,
    pub weight_lbs: f64,
    pub base_fee: f64,
    pub cost_per_lb: f64,
    pub total_cost: f64,
}

/// Resolves shipping rates against the configured rate table with
/// compiled-in defaults as fallback
pub struct RateResolver<R: RateRepository> {
    rates: Arc<R>,
}

impl<R: RateRepository> RateResolver<R> {
    /// Create a new resolver over a rate table
    pub fn new(rates: Arc<R>) -> Self {
        Self { rates }
    }

    /// Resolve a rate by method and weight only.
    ///
    /// This is the consolidation path; it deliberately omits the
    /// destination dimension of the rate table.
    pub async fn resolve(
        &self,
        method: ShippingMethod,
        weight_lbs: f64,
    ) -> Result<ResolvedRate, CoreError> {
        let configured = self.rates.find_band(method.as_str(), weight_lbs).await?;
        Ok(configured
            .map(|row| ResolvedRate::from(&row))
            .unwrap_or_else(|| ResolvedRate::default_for(method)))
    }

    /// Resolve a rate by method, destination country, and weight
    pub async fn resolve_for_destination(
        &self,
        method: ShippingMethod,
        destination: &str,
        weight_lbs: f64,
    ) -> Result<ResolvedRate, CoreError> {
        let configured = self
            .rates
            .find_band_for_destination(method.as_str(), destination, weight_lbs)
            .await?;
        Ok(configured
            .map(|row| ResolvedRate::from(&row))
            .unwrap_or_else(|| ResolvedRate::default_for(method)))
    }

    /// Produce a destination-filtered quote with validated weight
    pub async fn quote(
        &self,
        method: ShippingMethod,
        destination: &str,
        weight_lbs: f64,
    ) -> Result<RateQuote, CoreError> {
        validate_weight(weight_lbs)?;
        let rate = self.resolve_for_destination(method, destination, weight_lbs).await?;
        let total_cost = tiered_cost(&rate, weight_lbs)?;

        Ok(RateQuote {
            method,
            weight_lbs,
            base_fee: rate.base_fee,
            cost_per_lb: rate.cost_per_lb,
            total_cost,
        })
    }
}
