//! Core errors
//!
//! One taxonomy for every validation and persistence failure in the core.
//! Validation errors are always raised before any write; a database error
//! surfacing from here means the primary write failed (best-effort
//! secondary writes are logged and swallowed at the call site, never
//! propagated).

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// No authenticated requester
    #[error("unauthorized")]
    Unauthorized,

    /// Required input absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Shipping method not in the canonical enum for this code path
    #[error("invalid shipping method: {0}")]
    InvalidMethod(String),

    /// Weight not a positive finite number within the allowed range
    #[error("weight must be a positive number between 0 and 10000 lbs, got {0}")]
    InvalidWeight(f64),

    /// Requested packages missing or not owned by the requester.
    ///
    /// Deliberately conflated so callers cannot distinguish "does not
    /// exist" from "belongs to someone else".
    #[error("one or more packages not found or do not belong to user")]
    OwnershipOrNotFound,

    /// Package(s) not in a consolidatable status
    #[error("some packages are not available for consolidation (must be received or stored)")]
    InvalidState,

    /// Forward attempted on a parcel outside RECEIVED/PROCESSING
    #[error("package cannot be forwarded, current status: {0}")]
    InvalidTransition(String),

    /// Record not found
    #[error("not found")]
    NotFound,

    /// Requester lacks the required role
    #[error("forbidden")]
    Forbidden,

    /// Underlying write or read collaborator failed
    #[error(transparent)]
    Database(#[from] suitebox_db::DbError),
}
