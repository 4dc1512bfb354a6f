//! Wire DTOs for the backend HTTP boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies exactly so serde catches
//! shape drift. Flags like `authenticated` and `success` stay required: a
//! body without them fails to parse, and callers treat a parse failure the
//! same as a denial. Only genuinely optional fields carry
//! `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /verify-session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the ambient session cookie maps to a live session.
    pub authenticated: bool,
    /// Display name of the session owner, when authenticated.
    #[serde(default)]
    pub username: Option<String>,
}

/// Body of `POST /login` and `POST /signup` on a 2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialResponse {
    /// Whether the credential submission was accepted.
    pub success: bool,
    /// Display name echoed back for the new session.
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, e.g. `"Invalid username or password"`.
    pub error: String,
}

/// Request body for `POST /generate_logo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRequest {
    /// Company name rendered into the mark.
    pub company_name: String,
    /// Industry hint, e.g. `"fintech"`.
    pub sector: String,
    /// Visual style from the fixed picker list.
    pub style: String,
    /// Six-digit hex color without the leading `#`.
    pub color: String,
}

/// Body of `POST /generate_logo` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoResponse {
    /// URL of the rendered logo image.
    pub logo: String,
}

/// Request body for `POST /generate_image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Free-form subject prompt.
    pub prompt: String,
    /// Style tag from the fixed picker list.
    pub style: String,
}

/// Body of `POST /generate_image` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// URL of the generated image.
    pub image_url: String,
    /// Server-side id of the stored image.
    pub image_id: i64,
}

/// One stored image in the `GET /user_images` gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImage {
    pub id: i64,
    /// Prompt the image was generated from.
    pub prompt: String,
    #[serde(default)]
    pub style: Option<String>,
    pub image_url: String,
    /// Server-side creation timestamp, opaque to the client.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `GET /user_images`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImages {
    #[serde(default)]
    pub images: Vec<SavedImage>,
}

/// Request body for `POST /generate_video`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Free-form subject prompt.
    pub prompt: String,
    /// Style tag from the fixed picker list.
    pub style: String,
    /// Clip length in seconds.
    pub duration: u32,
}

/// Body of `POST /generate_video` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResponse {
    /// URL of the generated clip.
    pub video_url: String,
    /// Server-side id of the stored clip.
    pub video_id: i64,
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
    /// Model identifier forwarded to the provider.
    pub model: String,
    /// Provider API key supplied by the user for this session only.
    pub api_key: String,
}

/// Body of `POST /chat` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply text.
    pub response: String,
    /// Model that produced the reply.
    pub model: String,
}

/// Request body for `POST /post/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    /// Subject of the post.
    pub topic: String,
    /// Output format, e.g. `"blog post"`.
    pub format: String,
    /// Writing tone, e.g. `"professional"`.
    pub tone: String,
    /// Approximate length in words.
    pub word_count: u32,
}

/// Body of `POST /post/generate` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    /// Generated post body as plain text.
    pub content: String,
}

/// Request body for `POST /post/save`.
///
/// The backend reads `wordCount` here but reports `word_count` back in
/// history entries; the two shapes are not interchangeable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSaveRequest {
    /// Subject of the post.
    pub topic: String,
    /// Full post text being saved.
    pub content: String,
    /// Output format the post was generated with.
    pub format: String,
    /// Writing tone the post was generated with.
    pub tone: String,
    /// Approximate length in words.
    pub word_count: u32,
}

/// Request body for `PUT /post/update/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    /// Subject of the post.
    pub topic: String,
    /// Replacement post text.
    pub content: String,
}

/// One stored post in the `GET /post/history` listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPost {
    pub id: i64,
    /// Subject the post was generated from.
    pub topic: String,
    /// Full post text.
    pub content: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    /// Zero when the entry was saved without a length.
    #[serde(default)]
    pub word_count: u32,
    /// Server-side creation timestamp, opaque to the client.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `GET /post/history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPosts {
    #[serde(default)]
    pub posts: Vec<SavedPost>,
}
