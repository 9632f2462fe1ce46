//! Suitebox Types - Shared domain types
//!
//! This crate contains domain types used across Suitebox services:
//! - Typed identifiers for users, packages, shipments, and invoices
//! - Shipping methods and their compiled-in defaults
//! - Subscription tiers and consolidation fees
//! - Addresses, customs declarations, and cost breakdowns

pub mod ids;
pub mod invoice;
pub mod method;
pub mod package;
pub mod shipment;
pub mod tier;

pub use ids::*;
pub use invoice::*;
pub use method::*;
pub use package::*;
pub use shipment::*;
pub use tier::*;
