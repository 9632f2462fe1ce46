//! Lifecycle state machine tests over the in-memory parcel store

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use suitebox_core::{
    estimated_delivery_date, CoreError, ForwardParcel, PackageLifecycleService, ReceiveParcel,
};
use suitebox_db::{MemoryParcelRepository, ParcelRepository};
use suitebox_types::{Dimensions, FreightMethod, ParcelStatus, UserId};

fn service() -> (Arc<MemoryParcelRepository>, PackageLifecycleService<MemoryParcelRepository>) {
    let store = Arc::new(MemoryParcelRepository::new());
    (Arc::clone(&store), PackageLifecycleService::new(store))
}

fn receipt(user_id: UserId) -> ReceiveParcel {
    ReceiveParcel {
        user_id,
        tracking_number: "1Z999AA10123456784".to_string(),
        description: "Sneakers".to_string(),
        weight_kg: 1.2,
        dimensions: Dimensions { length: 30.0, width: 20.0, height: 12.0 },
    }
}

fn forward_request(parcel_id: Uuid, method: FreightMethod) -> ForwardParcel {
    ForwardParcel {
        parcel_id,
        shipping_method: method,
        destination_address: "12 Rua Augusta, Sao Paulo".to_string(),
        destination_country: "Brazil".to_string(),
        estimated_delivery: estimated_delivery_date(method),
    }
}

#[tokio::test]
async fn receive_creates_a_received_parcel() {
    let (_, svc) = service();
    let user_id = UserId::new();

    let parcel = svc.receive(receipt(user_id)).await.unwrap();

    assert_eq!(parcel.status, ParcelStatus::Received.to_string());
    assert_eq!(parcel.user_id, user_id.0);
    assert!(parcel.received_at.is_some());
    assert!(parcel.forwarded_at.is_none());
    assert!(parcel.delivered_at.is_none());
    assert!(parcel.shipping_method.is_none());
}

#[tokio::test]
async fn duplicate_tracking_numbers_become_separate_parcels() {
    let (store, svc) = service();
    let user_id = UserId::new();

    svc.receive(receipt(user_id)).await.unwrap();
    svc.receive(receipt(user_id)).await.unwrap();

    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn get_unknown_parcel_is_not_found() {
    let (_, svc) = service();

    let err = svc.get(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, CoreError::NotFound));
}

#[tokio::test]
async fn list_for_user_only_returns_own_parcels() {
    let (_, svc) = service();
    let alice = UserId::new();
    let bob = UserId::new();

    svc.receive(receipt(alice)).await.unwrap();
    svc.receive(receipt(alice)).await.unwrap();
    svc.receive(receipt(bob)).await.unwrap();

    assert_eq!(svc.list_for_user(alice).await.unwrap().len(), 2);
    assert_eq!(svc.list_for_user(bob).await.unwrap().len(), 1);
    assert_eq!(svc.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn delete_removes_the_parcel() {
    let (store, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();

    svc.delete(parcel.id).await.unwrap();

    assert!(store.is_empty());
    assert!(matches!(svc.get(parcel.id).await.unwrap_err(), CoreError::NotFound));
    assert!(matches!(svc.delete(parcel.id).await.unwrap_err(), CoreError::NotFound));
}

#[tokio::test]
async fn update_status_allows_any_transition() {
    let (_, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();

    // Even a backwards move is accepted
    let parcel = svc.update_status(parcel.id, ParcelStatus::Delivered).await.unwrap();
    assert_eq!(parcel.status, ParcelStatus::Delivered.to_string());

    let parcel = svc.update_status(parcel.id, ParcelStatus::AwaitingArrival).await.unwrap();
    assert_eq!(parcel.status, ParcelStatus::AwaitingArrival.to_string());
}

#[tokio::test]
async fn transition_timestamps_are_set_once() {
    let (_, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();

    let parcel = svc.update_status(parcel.id, ParcelStatus::InTransit).await.unwrap();
    let first_forwarded = parcel.forwarded_at.unwrap();

    // Leaving and re-entering IN_TRANSIT keeps the original timestamp
    let parcel = svc.update_status(parcel.id, ParcelStatus::Exception).await.unwrap();
    let parcel = svc.update_status(parcel.id, ParcelStatus::InTransit).await.unwrap();
    assert_eq!(parcel.forwarded_at, Some(first_forwarded));

    let parcel = svc.update_status(parcel.id, ParcelStatus::Delivered).await.unwrap();
    let first_delivered = parcel.delivered_at.unwrap();
    let parcel = svc.update_status(parcel.id, ParcelStatus::Delivered).await.unwrap();
    assert_eq!(parcel.delivered_at, Some(first_delivered));
}

#[tokio::test]
async fn forward_moves_received_parcel_to_in_transit() {
    let (_, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();

    let before = Utc::now();
    let parcel = svc.forward(forward_request(parcel.id, FreightMethod::AirFreight)).await.unwrap();

    assert_eq!(parcel.status, ParcelStatus::InTransit.to_string());
    assert_eq!(parcel.shipping_method.as_deref(), Some("AIR_FREIGHT"));
    assert!(parcel.forwarded_at.unwrap() >= before);

    let eta = parcel.estimated_delivery.unwrap() - Utc::now();
    assert!(eta > Duration::days(6) && eta <= Duration::days(7));
}

#[tokio::test]
async fn forward_accepts_processing_parcels() {
    let (_, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();
    let parcel = svc.update_status(parcel.id, ParcelStatus::Processing).await.unwrap();

    let parcel = svc.forward(forward_request(parcel.id, FreightMethod::SeaFreight)).await.unwrap();

    assert_eq!(parcel.status, ParcelStatus::InTransit.to_string());
    assert_eq!(parcel.shipping_method.as_deref(), Some("SEA_FREIGHT"));
}

#[tokio::test]
async fn forward_always_refreshes_forwarded_at() {
    let (_, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();

    // A status update stamped forwarded_at already
    let parcel = svc.update_status(parcel.id, ParcelStatus::InTransit).await.unwrap();
    let stamped = parcel.forwarded_at.unwrap();
    svc.update_status(parcel.id, ParcelStatus::Processing).await.unwrap();

    let parcel = svc.forward(forward_request(parcel.id, FreightMethod::AirFreight)).await.unwrap();

    assert!(parcel.forwarded_at.unwrap() >= stamped);
}

#[tokio::test]
async fn forward_rejects_non_forwardable_states() {
    let (store, svc) = service();
    let parcel = svc.receive(receipt(UserId::new())).await.unwrap();
    let parcel = svc.update_status(parcel.id, ParcelStatus::Delivered).await.unwrap();

    let err = svc.forward(forward_request(parcel.id, FreightMethod::AirFreight)).await.unwrap_err();

    match err {
        CoreError::InvalidTransition(status) => {
            assert_eq!(status, ParcelStatus::Delivered.to_string())
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The rejected forward mutated nothing
    let unchanged = store.get(parcel.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, ParcelStatus::Delivered.to_string());
    assert!(unchanged.shipping_method.is_none());
}

#[tokio::test]
async fn forward_unknown_parcel_is_not_found() {
    let (_, svc) = service();

    let err =
        svc.forward(forward_request(Uuid::new_v4(), FreightMethod::AirFreight)).await.unwrap_err();

    assert!(matches!(err, CoreError::NotFound));
}
