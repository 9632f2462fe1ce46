//! Package status types
//!
//! Warehouse packages and standalone parcels track different lifecycles.
//! [`PackageStatus`] covers the warehouse/consolidation flow where only
//! `received` and `stored` packages may be consolidated; [`ParcelStatus`]
//! is the forwarding state machine of the standalone package model.

use serde::{Deserialize, Serialize};

/// Status of a warehouse package in the consolidation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    /// Received at the warehouse, awaiting instructions
    Received,
    /// Placed into longer-term storage
    Stored,
    /// Attached to a consolidated shipment
    Consolidated,
    /// Left the warehouse
    Shipped,
}

impl PackageStatus {
    /// Whether a package in this status may join a consolidation
    pub const fn is_consolidatable(&self) -> bool {
        matches!(self, Self::Received | Self::Stored)
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Received => write!(f, "received"),
            Self::Stored => write!(f, "stored"),
            Self::Consolidated => write!(f, "consolidated"),
            Self::Shipped => write!(f, "shipped"),
        }
    }
}

impl std::str::FromStr for PackageStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "received" => Ok(Self::Received),
            "stored" => Ok(Self::Stored),
            "consolidated" => Ok(Self::Consolidated),
            "shipped" => Ok(Self::Shipped),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// Forwarding state of a standalone parcel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParcelStatus {
    /// Announced but not yet at the warehouse
    AwaitingArrival,
    /// Received at the warehouse
    Received,
    /// Being prepared for forwarding
    Processing,
    /// Forwarded, en route to the destination
    InTransit,
    /// Delivered to the destination
    Delivered,
    /// Held for manual attention
    Exception,
}

impl ParcelStatus {
    /// Whether a parcel in this status may be forwarded
    pub const fn is_forwardable(&self) -> bool {
        matches!(self, Self::Received | Self::Processing)
    }

    /// Wire name of this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingArrival => "AWAITING_ARRIVAL",
            Self::Received => "RECEIVED",
            Self::Processing => "PROCESSING",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Exception => "EXCEPTION",
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParcelStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AWAITING_ARRIVAL" => Ok(Self::AwaitingArrival),
            "RECEIVED" => Ok(Self::Received),
            "PROCESSING" => Ok(Self::Processing),
            "IN_TRANSIT" => Ok(Self::InTransit),
            "DELIVERED" => Ok(Self::Delivered),
            "EXCEPTION" => Ok(Self::Exception),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// Package dimensions; centimeters for parcels, inches for warehouse packages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Error parsing a status string
#[derive(Debug, Clone)]
pub struct StatusParseError(pub String);

impl std::fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid status: {}", self.0)
    }
}

impl std::error::Error for StatusParseError {}
