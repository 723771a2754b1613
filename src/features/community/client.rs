//! Client wrappers for community discussion API endpoints.

use crate::{
    client::{ApiClient, RequestDescriptor},
    errors::ApiError,
    features::community::types::{NewComment, NewDiscussion},
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Fetches all community discussions.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn list_discussions(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .send_json(RequestDescriptor::get("/api/community/discussions"))
        .await
}

/// Fetches the community member directory.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn list_members(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .send_json(RequestDescriptor::get("/api/community/members"))
        .await
}

/// Creates a discussion, optionally attaching an image. The payload goes as
/// a multipart form; no content-type header is set here so the boundary is
/// generated by the transport.
/// # Errors
/// Returns an error if the form cannot be built or the request fails.
pub async fn create_discussion(
    client: &ApiClient,
    discussion: NewDiscussion,
) -> Result<Value, ApiError> {
    let tags = serde_json::to_string(&discussion.tags)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode tags: {err}")))?;

    let mut form = Form::new()
        .text("title", discussion.title)
        .text("content", discussion.content)
        .text("tags", tags);

    if let Some(image) = discussion.image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|err| ApiError::Serialization(format!("Failed to build image part: {err}")))?;
        form = form.part("image", part);
    }

    client
        .send_json(RequestDescriptor::post_multipart(
            "/api/community/discussions",
            form,
        ))
        .await
}

/// Toggles the current user's like on a discussion.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn toggle_like(client: &ApiClient, discussion_id: &str) -> Result<Value, ApiError> {
    let path = format!("/api/community/discussions/{discussion_id}/like");
    client.send_json(RequestDescriptor::post(path)).await
}

/// Adds a comment to a discussion.
/// # Errors
/// Returns an error if the request fails; failures propagate to the caller.
pub async fn add_comment(
    client: &ApiClient,
    discussion_id: &str,
    comment: &NewComment,
) -> Result<Value, ApiError> {
    let path = format!("/api/community/discussions/{discussion_id}/comment");
    client
        .send_json(RequestDescriptor::post_json(path, comment)?)
        .await
}
