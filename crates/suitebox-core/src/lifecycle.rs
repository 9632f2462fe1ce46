//! Standalone package lifecycle
//!
//! The forwarding state machine over the injected [`ParcelRepository`]:
//! receive, status updates with set-once timestamps, and the forward
//! operation. Any status is reachable from any other through
//! `update_status`; only `forward` is restricted, to parcels in
//! RECEIVED or PROCESSING.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use suitebox_db::{ParcelRepository, ParcelRow};
use suitebox_types::{Dimensions, FreightMethod, ParcelStatus, UserId};

use crate::error::CoreError;

/// Input for receiving a parcel at the warehouse
#[derive(Debug, Clone)]
pub struct ReceiveParcel {
    pub user_id: UserId,
    pub tracking_number: String,
    pub description: String,
    pub weight_kg: f64,
    pub dimensions: Dimensions,
}

/// Input for forwarding a received parcel
#[derive(Debug, Clone)]
pub struct ForwardParcel {
    pub parcel_id: Uuid,
    pub shipping_method: FreightMethod,
    pub destination_address: String,
    pub destination_country: String,
    pub estimated_delivery: DateTime<Utc>,
}

/// Package lifecycle service
pub struct PackageLifecycleService<P: ParcelRepository> {
    parcels: Arc<P>,
}

impl<P: ParcelRepository> PackageLifecycleService<P> {
    /// Create a new lifecycle service over a parcel store
    pub fn new(parcels: Arc<P>) -> Self {
        Self { parcels }
    }

    /// Record a parcel arriving at the warehouse.
    ///
    /// No uniqueness check on the tracking number; duplicate arrivals
    /// become separate records.
    pub async fn receive(&self, input: ReceiveParcel) -> Result<ParcelRow, CoreError> {
        let parcel = ParcelRow {
            id: Uuid::new_v4(),
            user_id: input.user_id.0,
            tracking_number: input.tracking_number,
            description: input.description,
            weight_kg: input.weight_kg,
            length_cm: input.dimensions.length,
            width_cm: input.dimensions.width,
            height_cm: input.dimensions.height,
            status: ParcelStatus::Received.to_string(),
            received_at: Some(Utc::now()),
            forwarded_at: None,
            delivered_at: None,
            shipping_method: None,
            estimated_delivery: None,
        };

        Ok(self.parcels.upsert(parcel).await?)
    }

    /// Fetch a parcel by id
    pub async fn get(&self, parcel_id: Uuid) -> Result<ParcelRow, CoreError> {
        self.parcels.get(parcel_id).await?.ok_or(CoreError::NotFound)
    }

    /// List parcels owned by a user
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<ParcelRow>, CoreError> {
        Ok(self.parcels.list_for_owner(user_id.0).await?)
    }

    /// List every parcel in the store
    pub async fn list(&self) -> Result<Vec<ParcelRow>, CoreError> {
        Ok(self.parcels.list().await?)
    }

    /// Remove a parcel from the store
    pub async fn delete(&self, parcel_id: Uuid) -> Result<(), CoreError> {
        // Get first so a missing id surfaces as NotFound
        self.get(parcel_id).await?;
        Ok(self.parcels.delete(parcel_id).await?)
    }

    /// Overwrite a parcel's status.
    ///
    /// Unrestricted: any status is reachable from any other. The first
    /// transition to IN_TRANSIT stamps `forwarded_at` and the first to
    /// DELIVERED stamps `delivered_at`; repeat calls never overwrite an
    /// already-set timestamp.
    pub async fn update_status(
        &self,
        parcel_id: Uuid,
        status: ParcelStatus,
    ) -> Result<ParcelRow, CoreError> {
        let mut parcel = self.get(parcel_id).await?;

        parcel.status = status.to_string();
        match status {
            ParcelStatus::InTransit if parcel.forwarded_at.is_none() => {
                parcel.forwarded_at = Some(Utc::now());
            }
            ParcelStatus::Delivered if parcel.delivered_at.is_none() => {
                parcel.delivered_at = Some(Utc::now());
            }
            _ => {}
        }

        Ok(self.parcels.upsert(parcel).await?)
    }

    /// Forward a parcel to its destination.
    ///
    /// Only parcels in RECEIVED or PROCESSING may be forwarded. Unlike
    /// `update_status`, forwarding always refreshes `forwarded_at`, even
    /// when a prior status update already set it.
    pub async fn forward(&self, req: ForwardParcel) -> Result<ParcelRow, CoreError> {
        let mut parcel = self.get(req.parcel_id).await?;

        let forwardable = parcel
            .status
            .parse::<ParcelStatus>()
            .map(|s| s.is_forwardable())
            .unwrap_or(false);
        if !forwardable {
            return Err(CoreError::InvalidTransition(parcel.status.clone()));
        }

        parcel.status = ParcelStatus::InTransit.to_string();
        parcel.shipping_method = Some(req.shipping_method.to_string());
        parcel.estimated_delivery = Some(req.estimated_delivery);
        parcel.forwarded_at = Some(Utc::now());

        let parcel = self.parcels.upsert(parcel).await?;

        tracing::info!(
            parcel_id = %req.parcel_id,
            method = %req.shipping_method,
            destination = %req.destination_country,
            "parcel forwarded"
        );

        Ok(parcel)
    }
}
