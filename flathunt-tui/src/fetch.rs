//! Spawned API calls reporting back through the event channel.
//!
//! Fetch tasks never touch application state: they run the request and
//! post an [`ApiOutcome`] carrying the tag the request was issued under.

use crate::api_client::ApiClient;
use crate::events::{ApiOutcome, AppEvent};
use flathunt_core::{ApartmentId, ApartmentQuery, CreateApartmentRequest};
use tokio::sync::mpsc;

pub fn spawn_listings_fetch(
    api: ApiClient,
    seq: u64,
    query: ApartmentQuery,
    sender: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = api.list_apartments(&query).await;
        let _ = sender
            .send(AppEvent::Api(ApiOutcome::Listings { seq, result }))
            .await;
    });
}

pub fn spawn_detail_fetch(api: ApiClient, id: ApartmentId, sender: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = api.get_apartment(id).await;
        let _ = sender
            .send(AppEvent::Api(ApiOutcome::Detail { id, result }))
            .await;
    });
}

pub fn spawn_create(
    api: ApiClient,
    request: CreateApartmentRequest,
    sender: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = api.create_apartment(&request).await;
        let _ = sender
            .send(AppEvent::Api(ApiOutcome::Created { result }))
            .await;
    });
}
