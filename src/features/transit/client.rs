//! Client wrappers for transit endpoints: network overview, routes,
//! vehicle positions, and service alerts.

use crate::{
    client::{ApiClient, RequestDescriptor},
    errors::ApiError,
};
use serde_json::Value;

/// Fetches the transit network overview.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn overview(client: &ApiClient) -> Result<Value, ApiError> {
    client.send_json(RequestDescriptor::get("/api/transit")).await
}

/// Fetches one route with its stops and schedule.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn route(client: &ApiClient, route_id: &str) -> Result<Value, ApiError> {
    let path = format!("/api/transit/routes/{route_id}");
    client.send_json(RequestDescriptor::get(path)).await
}

/// Fetches the live position of one vehicle.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn vehicle(client: &ApiClient, vehicle_id: &str) -> Result<Value, ApiError> {
    let path = format!("/api/transit/vehicles/{vehicle_id}");
    client.send_json(RequestDescriptor::get(path)).await
}

/// Fetches active service alerts.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn alerts(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .send_json(RequestDescriptor::get("/api/transit/alerts"))
        .await
}
