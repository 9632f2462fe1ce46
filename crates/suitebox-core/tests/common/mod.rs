//! Shared test fixtures
// Not every test binary uses every fixture.
#![allow(dead_code)]

pub mod mock_repos;

use chrono::Utc;
use uuid::Uuid;

use suitebox_db::{PackageRow, UserRow};
use suitebox_types::Address;

/// A warehouse package in `received` status with the given weight/value
pub fn received_package(user_id: Uuid, weight_lbs: f64, declared_value: f64) -> PackageRow {
    PackageRow {
        id: Uuid::new_v4(),
        user_id,
        tracking_number: format!("TRK-{}", Uuid::new_v4().simple()),
        carrier: Some("UPS".to_string()),
        weight_lbs: Some(weight_lbs),
        length_in: Some(12.0),
        width_in: Some(10.0),
        height_in: Some(6.0),
        declared_value: Some(declared_value),
        status: "received".to_string(),
        received_at: Utc::now(),
        consolidated_shipment_id: None,
    }
}

/// A user row with the given subscription tier
pub fn user_with_tier(tier: &str) -> UserRow {
    UserRow {
        id: Uuid::new_v4(),
        email: format!("test-{}@example.com", Uuid::new_v4().simple()),
        name: Some("Test User".to_string()),
        home_country: Some("BR".to_string()),
        suite_number: "STE-10001".to_string(),
        subscription_tier: tier.to_string(),
        role: "user".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A destination address for consolidation requests
pub fn destination() -> Address {
    Address {
        street: "Av. Paulista 1000".to_string(),
        city: "Sao Paulo".to_string(),
        state: "SP".to_string(),
        zip: "01310-100".to_string(),
        country: "BR".to_string(),
    }
}
