//! In-memory parcel store
//!
//! The standalone forwarding model keeps its parcels in process memory.
//! This store implements [`ParcelRepository`] over a concurrent map so the
//! lifecycle rules in suitebox-core stay independent of where parcels
//! actually live.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::ParcelRow;
use crate::repo::ParcelRepository;

/// Concurrent in-memory parcel repository
#[derive(Default, Clone)]
pub struct MemoryParcelRepository {
    parcels: Arc<DashMap<Uuid, ParcelRow>>,
}

impl MemoryParcelRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parcels currently stored
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}

#[async_trait]
impl ParcelRepository for MemoryParcelRepository {
    async fn get(&self, id: Uuid) -> DbResult<Option<ParcelRow>> {
        Ok(self.parcels.get(&id).map(|r| r.value().clone()))
    }

    async fn list_for_owner(&self, user_id: Uuid) -> DbResult<Vec<ParcelRow>> {
        Ok(self
            .parcels
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn list(&self) -> DbResult<Vec<ParcelRow>> {
        Ok(self.parcels.iter().map(|r| r.value().clone()).collect())
    }

    async fn upsert(&self, parcel: ParcelRow) -> DbResult<ParcelRow> {
        self.parcels.insert(parcel.id, parcel.clone());
        Ok(parcel)
    }

    async fn delete(&self, id: Uuid) -> DbResult<()> {
        self.parcels.remove(&id);
        Ok(())
    }
}
