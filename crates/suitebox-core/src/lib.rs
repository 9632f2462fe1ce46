//! Suitebox Core - Consolidation and rating business logic
//!
//! The business core of the parcel-forwarding platform:
//! - Rate table resolution with compiled-in defaults per method
//! - The two pricing models: tiered (rate table) and region-multiplier
//! - Package eligibility validation for consolidation
//! - The consolidation orchestrator (shipment + invoices + notification)
//! - The standalone package lifecycle state machine
//!
//! Everything here is generic over the repository traits in suitebox-db and
//! is exercised against in-memory fakes in the integration tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use suitebox_core::{ConsolidationConfig, ConsolidationRequest, ConsolidationService};
//!
//! let service = ConsolidationService::new(
//!     packages, users, rates, shipments, invoices, notifications,
//!     ConsolidationConfig::default(),
//! );
//!
//! let outcome = service.consolidate(ConsolidationRequest {
//!     user_id,
//!     package_ids,
//!     shipping_method: Some("air_economy".into()),
//!     destination_address: Some(address),
//! }).await?;
//! ```

pub mod config;
pub mod consolidate;
pub mod eligibility;
pub mod error;
pub mod lifecycle;
pub mod notify;
pub mod pricing;
pub mod rates;

pub use config::ConsolidationConfig;
pub use consolidate::{ConsolidationOutcome, ConsolidationRequest, ConsolidationService};
pub use eligibility::EligibilityChecker;
pub use error::CoreError;
pub use lifecycle::{ForwardParcel, PackageLifecycleService, ReceiveParcel};
pub use notify::{LogMailer, Mailer, MailerError, PackageNotifier, PackageReceivedEmail};
pub use pricing::{destination_multiplier, estimated_delivery_date, freight_cost};
pub use rates::{RateQuote, RateResolver, ResolvedRate, MAX_WEIGHT_LBS};
