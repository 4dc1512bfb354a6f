//! REST API helpers for communicating with the backend service.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, with the session cookie
//! attached to every request. Native: stubs returning `None`/error so the
//! crate still compiles for unit tests.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. `Option` means
//! the caller degrades quietly (the session check, the gallery); `Result`
//! carries a message fit to show the user. Non-2xx responses prefer the
//! server's own `error` body over a generic fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ChatRequest, ChatResponse, ImageRequest, ImageResponse, LogoRequest, PostRequest,
    PostSaveRequest, PostUpdateRequest, SavedImage, SavedPost, SessionResponse, VideoRequest,
    VideoResponse,
};
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorResponse;
#[cfg(feature = "csr")]
use super::types::{CredentialResponse, LogoResponse, PostResponse, SavedImages, SavedPosts};

/// Origin of the backend service. The session cookie is scoped to it, so
/// every request opts into credentials.
#[cfg(any(test, feature = "csr"))]
const API_BASE: &str = "http://localhost:5000";

/// Message shown for transport-level failures (server unreachable, DNS,
/// CORS). Deliberately generic: the user cannot act on the details.
#[cfg(any(test, feature = "csr"))]
const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn signup_failed_message(status: u16) -> String {
    format!("signup failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn generation_failed_message(kind: &str, status: u16) -> String {
    format!("{kind} generation failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn image_delete_failed_message(status: u16) -> String {
    format!("image delete failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn post_action_failed_message(action: &str, status: u16) -> String {
    format!("post {action} failed: {status}")
}

/// Prefer the server's `error` body over the caller's fallback message.
#[cfg(any(test, feature = "csr"))]
fn server_error_or(body: Option<ErrorResponse>, fallback: String) -> String {
    body.map_or(fallback, |b| b.error)
}

/// Check the cookie-backed session via `GET /verify-session`.
///
/// Returns `None` on transport failure, non-2xx status, or a malformed
/// body. The caller treats all of those the same as a denial, so this
/// endpoint never needs a user-facing error message.
pub async fn verify_session() -> Option<SessionResponse> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/verify-session"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Submit credentials via `POST /login`. Returns the session username.
///
/// # Errors
///
/// Returns an error string fit to show the user: the server's own message
/// when the response body carries one, a status fallback otherwise, and a
/// generic network message for transport failures.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(body, login_failed_message(resp.status())));
        }
        match resp.json::<CredentialResponse>().await {
            Ok(body) if body.success => body
                .username
                .ok_or_else(|| login_failed_message(resp.status())),
            _ => Err(login_failed_message(resp.status())),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Register a new account via `POST /signup`. Returns the session username.
///
/// # Errors
///
/// Same contract as [`login`]: server message, status fallback, or a
/// generic network message.
pub async fn signup(username: &str, email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload =
            serde_json::json!({ "username": username, "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/signup"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(body, signup_failed_message(resp.status())));
        }
        match resp.json::<CredentialResponse>().await {
            Ok(body) if body.success => body
                .username
                .ok_or_else(|| signup_failed_message(resp.status())),
            _ => Err(signup_failed_message(resp.status())),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Invalidate the server session via `POST /logout`.
///
/// Best-effort by contract: the caller clears local session state whether
/// or not this succeeds, so the error is only useful as a diagnostic.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(logout_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Render a logo via `POST /generate_logo`. Returns the image URL.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure, non-2xx
/// status, or a malformed body.
pub async fn generate_logo(request: &LogoRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/generate_logo"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                generation_failed_message("logo", resp.status()),
            ));
        }
        let body: LogoResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.logo)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Generate an image via `POST /generate_image`.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure, non-2xx
/// status, or a malformed body.
pub async fn generate_image(request: &ImageRequest) -> Result<ImageResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/generate_image"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                generation_failed_message("image", resp.status()),
            ));
        }
        resp.json::<ImageResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the caller's saved images from `GET /user_images`.
/// Returns `None` on any failure; the gallery renders as empty.
pub async fn fetch_saved_images() -> Option<Vec<SavedImage>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/user_images"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<SavedImages>().await.ok()?;
        Some(body.images)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Remove a stored image via `DELETE /delete_image/{id}`.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure or a non-2xx
/// status.
pub async fn delete_image(image_id: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(&format!("/delete_image/{image_id}")))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                image_delete_failed_message(resp.status()),
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = image_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Generate a short clip via `POST /generate_video`.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure, non-2xx
/// status, or a malformed body.
pub async fn generate_video(request: &VideoRequest) -> Result<VideoResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/generate_video"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                generation_failed_message("video", resp.status()),
            ));
        }
        resp.json::<VideoResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Send one chat message via `POST /chat` and await the assistant reply.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure, non-2xx
/// status, or a malformed body.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/chat"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                generation_failed_message("chat", resp.status()),
            ));
        }
        resp.json::<ChatResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Draft a social or blog post via `POST /post/generate`.
/// Returns the generated text.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure, non-2xx
/// status, or a malformed body.
pub async fn generate_post(request: &PostRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/post/generate"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                generation_failed_message("post", resp.status()),
            ));
        }
        let body: PostResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.content)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the caller's saved posts from `GET /post/history`.
/// Returns `None` on any failure; the history list renders as empty.
pub async fn fetch_post_history() -> Option<Vec<SavedPost>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/post/history"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<SavedPosts>().await.ok()?;
        Some(body.posts)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Store a generated post via `POST /post/save`.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure or a non-2xx
/// status.
pub async fn save_post(request: &PostSaveRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/post/save"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                post_action_failed_message("save", resp.status()),
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}

/// Replace a stored post's text via `PUT /post/update/{id}`.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure or a non-2xx
/// status.
pub async fn update_post(post_id: i64, request: &PostUpdateRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&endpoint(&format!("/post/update/{post_id}")))
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                post_action_failed_message("update", resp.status()),
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (post_id, request);
        Err("not available outside the browser".to_owned())
    }
}

/// Remove a stored post via `DELETE /post/delete/{id}`.
///
/// # Errors
///
/// Returns a user-facing error string on transport failure or a non-2xx
/// status.
pub async fn delete_post(post_id: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(&format!("/post/delete/{post_id}")))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|_| NETWORK_ERROR_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<ErrorResponse>().await.ok();
            return Err(server_error_or(
                body,
                post_action_failed_message("delete", resp.status()),
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = post_id;
        Err("not available outside the browser".to_owned())
    }
}
