//! Region-multiplier freight pricing
//!
//! The pricing model of the standalone forwarding path: a per-kilogram
//! base rate keyed by freight method, scaled by a fixed destination
//! multiplier. Two methods only; this model is intentionally separate from
//! the four-method tiered rate table in [`crate::rates`] and the two must
//! not be unified.

use chrono::{DateTime, Duration, Utc};

use suitebox_types::FreightMethod;

/// Fixed destination multiplier table; unknown destinations pay the base
/// rate unscaled
pub fn destination_multiplier(destination: &str) -> f64 {
    match destination {
        "Europe" => 1.2,
        "Asia" => 1.3,
        "Africa" => 1.4,
        "South America" => 1.15,
        "Australia" => 1.35,
        _ => 1.0,
    }
}

/// Freight cost: weight times the method's per-kilogram rate times the
/// destination multiplier
pub fn freight_cost(weight_kg: f64, method: FreightMethod, destination: &str) -> f64 {
    weight_kg * method.base_rate_per_kg() * destination_multiplier(destination)
}

/// Estimated delivery date from now for a freight method
pub fn estimated_delivery_date(method: FreightMethod) -> DateTime<Utc> {
    Utc::now() + Duration::days(method.transit_days())
}
