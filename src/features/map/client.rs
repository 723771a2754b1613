//! Client wrappers for map data endpoints. Traffic and environmental
//! readings are opaque JSON records; the map view renders them as-is.

use crate::{
    client::{ApiClient, RequestDescriptor},
    errors::ApiError,
};
use serde_json::Value;

/// Fetches traffic conditions for the whole city.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn traffic(client: &ApiClient) -> Result<Value, ApiError> {
    client.send_json(RequestDescriptor::get("/api/map/traffic")).await
}

/// Fetches traffic conditions for one location.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn traffic_at(client: &ApiClient, location_id: &str) -> Result<Value, ApiError> {
    let path = format!("/api/map/traffic/{location_id}");
    client.send_json(RequestDescriptor::get(path)).await
}

/// Fetches environmental readings for the whole city.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn environmental(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .send_json(RequestDescriptor::get("/api/map/environmental"))
        .await
}

/// Fetches environmental readings for one location.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn environmental_at(client: &ApiClient, location_id: &str) -> Result<Value, ApiError> {
    let path = format!("/api/map/environmental/{location_id}");
    client.send_json(RequestDescriptor::get(path)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ClientConfig, features::auth::state::SessionStore};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::new(server.uri()), SessionStore::new())
            .expect("client should build")
    }

    #[tokio::test]
    async fn traffic_at_interpolates_location_id() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/map/traffic/loc-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"congestion": "high"})))
            .expect(1)
            .mount(&server)
            .await;

        let body = traffic_at(&client_for(&server), "loc-42")
            .await
            .expect("request should succeed");
        assert_eq!(body, json!({"congestion": "high"}));
    }

    #[tokio::test]
    async fn environmental_hits_collection_path() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/map/environmental"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"aqi": 61}])))
            .expect(1)
            .mount(&server)
            .await;

        let body = environmental(&client_for(&server))
            .await
            .expect("request should succeed");
        assert_eq!(body, json!([{"aqi": 61}]));
    }

    #[tokio::test]
    async fn environmental_at_propagates_failures() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/map/environmental/loc-404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "unknown location"
            })))
            .mount(&server)
            .await;

        let err = environmental_at(&client_for(&server), "loc-404")
            .await
            .expect_err("expected error");
        assert!(err.to_string().contains("unknown location"));
    }
}
