//! Request types for community API calls. Discussion and member records
//! come back as opaque JSON; only outgoing payloads are typed here.

use serde::{Deserialize, Serialize};

/// Payload for creating a discussion. Sent as a multipart form so an image
/// can ride along with the text fields.
#[derive(Clone, Debug, Default)]
pub struct NewDiscussion {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub image: Option<ImageAttachment>,
}

/// Binary attachment for a discussion.
#[derive(Clone, Debug)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
}
