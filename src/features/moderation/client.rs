//! Client wrappers for moderation endpoints: flagging content, listing
//! flags, and resolving them.

use crate::{
    client::{ApiClient, RequestDescriptor},
    errors::ApiError,
    features::moderation::types::FlagResolution,
};
use serde_json::Value;

/// Sentinel status that disables the listing filter.
pub const STATUS_ALL: &str = "all";

/// Reports a piece of content. The report shape is defined by the backend;
/// it passes through unchanged.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn flag_content(client: &ApiClient, report: &Value) -> Result<Value, ApiError> {
    client
        .send_json(RequestDescriptor::post_json("/api/moderation/flag", report)?)
        .await
}

/// Lists flags, optionally filtered by status. The `"all"` sentinel omits
/// the filter entirely; any other value is sent as a single `status` query
/// parameter.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn list_flags(client: &ApiClient, status: &str) -> Result<Value, ApiError> {
    let path = if status == STATUS_ALL {
        "/api/moderation".to_string()
    } else {
        format!("/api/moderation?status={status}")
    };
    client.send_json(RequestDescriptor::get(path)).await
}

/// Resolves a flag with an action and reviewer comments.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn resolve_flag(
    client: &ApiClient,
    flag_id: &str,
    resolution: &FlagResolution,
) -> Result<Value, ApiError> {
    let path = format!("/api/moderation/{flag_id}/resolve");
    client
        .send_json(RequestDescriptor::post_json(path, resolution)?)
        .await
}
