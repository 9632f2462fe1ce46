//! Property-based tests for the two pricing models
//!
//! Covers the tiered rate-table model (base fee plus per-pound cost) and
//! the region-multiplier freight model. The two models are separate by
//! design and are tested separately here.

use proptest::prelude::*;

use suitebox_core::rates::{tiered_cost, validate_weight, ResolvedRate, MAX_WEIGHT_LBS};
use suitebox_core::{destination_multiplier, freight_cost};
use suitebox_types::{FreightMethod, ShippingMethod};

// ============================================================================
// Strategies
// ============================================================================

fn arb_shipping_method() -> impl Strategy<Value = ShippingMethod> {
    prop_oneof![
        Just(ShippingMethod::AirExpress),
        Just(ShippingMethod::AirEconomy),
        Just(ShippingMethod::SeaLcl),
        Just(ShippingMethod::SeaFcl),
    ]
}

fn arb_freight_method() -> impl Strategy<Value = FreightMethod> {
    prop_oneof![Just(FreightMethod::AirFreight), Just(FreightMethod::SeaFreight)]
}

/// Weights inside the quotable range (0, 10000]
fn arb_valid_weight() -> impl Strategy<Value = f64> {
    (0.001f64..=MAX_WEIGHT_LBS).prop_filter("positive", |w| *w > 0.0)
}

/// Known destination regions plus arbitrary unknown strings
fn arb_destination() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Europe".to_string()),
        Just("Asia".to_string()),
        Just("Africa".to_string()),
        Just("South America".to_string()),
        Just("Australia".to_string()),
        "[A-Za-z ]{0,20}",
    ]
}

// ============================================================================
// Tiered Model Properties
// ============================================================================

proptest! {
    /// Property: every valid weight prices successfully under every
    /// method's compiled-in default
    #[test]
    fn prop_valid_weights_always_price(
        method in arb_shipping_method(),
        weight in arb_valid_weight(),
    ) {
        let rate = ResolvedRate::default_for(method);
        let cost = tiered_cost(&rate, weight).unwrap();
        prop_assert!(cost.is_finite());
        prop_assert!(cost >= rate.base_fee);
    }

    /// Property: tiered cost is exactly base fee plus weight times
    /// per-pound rate
    #[test]
    fn prop_tiered_cost_is_affine(
        base in 0.0f64..1000.0,
        per_lb in 0.0f64..100.0,
        weight in arb_valid_weight(),
    ) {
        let rate = ResolvedRate { base_fee: base, cost_per_lb: per_lb };
        let cost = tiered_cost(&rate, weight).unwrap();
        prop_assert_eq!(cost, base + weight * per_lb);
    }

    /// Property: cost never decreases as weight grows within one rate
    #[test]
    fn prop_tiered_cost_monotone_in_weight(
        method in arb_shipping_method(),
        w1 in arb_valid_weight(),
        w2 in arb_valid_weight(),
    ) {
        let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        let rate = ResolvedRate::default_for(method);
        let cheap = tiered_cost(&rate, lo).unwrap();
        let pricey = tiered_cost(&rate, hi).unwrap();
        prop_assert!(cheap <= pricey);
    }

    /// Property: the FCL sentinel prices every weight at the flat fee
    #[test]
    fn prop_sea_fcl_is_flat(weight in arb_valid_weight()) {
        let rate = ResolvedRate::default_for(ShippingMethod::SeaFcl);
        prop_assert_eq!(tiered_cost(&rate, weight).unwrap(), 500.0);
    }

    /// Property: weights outside (0, 10000] never price
    #[test]
    fn prop_out_of_range_weights_rejected(weight in prop_oneof![
        -1000.0f64..=0.0,
        (MAX_WEIGHT_LBS + 0.001)..1.0e9,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]) {
        prop_assert!(validate_weight(weight).is_err());
        let rate = ResolvedRate::default_for(ShippingMethod::AirEconomy);
        prop_assert!(tiered_cost(&rate, weight).is_err());
    }
}

// ============================================================================
// Region-Multiplier Model Properties
// ============================================================================

proptest! {
    /// Property: the destination multiplier is always within [1.0, 1.4]
    #[test]
    fn prop_multiplier_bounded(destination in arb_destination()) {
        let m = destination_multiplier(&destination);
        prop_assert!((1.0..=1.4).contains(&m));
    }

    /// Property: freight cost is linear in weight (no base fee in this
    /// model), up to floating point
    #[test]
    fn prop_freight_cost_linear(
        method in arb_freight_method(),
        destination in arb_destination(),
        weight in 0.001f64..5000.0,
    ) {
        let single = freight_cost(weight, method, &destination);
        let double = freight_cost(weight * 2.0, method, &destination);
        let rel = (double - 2.0 * single).abs() / single.max(f64::MIN_POSITIVE);
        prop_assert!(rel < 1e-9, "single={single} double={double}");
    }

    /// Property: freight cost decomposes into weight, rate, and multiplier
    #[test]
    fn prop_freight_cost_decomposes(
        method in arb_freight_method(),
        destination in arb_destination(),
        weight in 0.0f64..5000.0,
    ) {
        let expected = weight * method.base_rate_per_kg() * destination_multiplier(&destination);
        prop_assert_eq!(freight_cost(weight, method, &destination), expected);
    }

    /// Property: air freight never undercuts sea freight to the same
    /// destination at the same weight
    #[test]
    fn prop_air_costs_at_least_sea(
        destination in arb_destination(),
        weight in 0.0f64..5000.0,
    ) {
        let air = freight_cost(weight, FreightMethod::AirFreight, &destination);
        let sea = freight_cost(weight, FreightMethod::SeaFreight, &destination);
        prop_assert!(air >= sea);
    }
}

// ============================================================================
// Edge Cases (Non-Property Tests)
// ============================================================================

#[test]
fn test_unknown_destinations_pay_base_rate() {
    for destination in ["", "Narnia", "europe", "EUROPE", "South  America"] {
        assert_eq!(
            destination_multiplier(destination),
            1.0,
            "destination {destination:?} should fall through to 1.0"
        );
    }
}

#[test]
fn test_region_matching_is_exact() {
    // Region names match exactly; no trimming or case folding
    assert_eq!(destination_multiplier("Europe"), 1.2);
    assert_eq!(destination_multiplier(" Europe"), 1.0);
    assert_eq!(destination_multiplier("Europe "), 1.0);
}
