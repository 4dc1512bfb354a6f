use super::*;

// =============================================================
// Session and credential bodies
// =============================================================

#[test]
fn session_response_parses_full_body() {
    let body: SessionResponse =
        serde_json::from_str(r#"{"authenticated": true, "username": "alice"}"#).unwrap();
    assert!(body.authenticated);
    assert_eq!(body.username.as_deref(), Some("alice"));
}

#[test]
fn session_response_username_is_optional() {
    let body: SessionResponse = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
    assert!(!body.authenticated);
    assert!(body.username.is_none());
}

#[test]
fn session_response_without_flag_fails_to_parse() {
    // A body missing `authenticated` is malformed; the verifier maps the
    // parse failure to signed-out rather than guessing.
    let result = serde_json::from_str::<SessionResponse>(r#"{"username": "alice"}"#);
    assert!(result.is_err());
}

#[test]
fn session_response_ignores_unknown_fields() {
    let body: SessionResponse =
        serde_json::from_str(r#"{"authenticated": true, "expires_in": 3600}"#).unwrap();
    assert!(body.authenticated);
}

#[test]
fn credential_response_parses_success() {
    let body: CredentialResponse =
        serde_json::from_str(r#"{"success": true, "username": "bob"}"#).unwrap();
    assert!(body.success);
    assert_eq!(body.username.as_deref(), Some("bob"));
}

#[test]
fn credential_response_without_flag_fails_to_parse() {
    let result = serde_json::from_str::<CredentialResponse>(r#"{"username": "bob"}"#);
    assert!(result.is_err());
}

#[test]
fn error_response_carries_server_message() {
    let body: ErrorResponse =
        serde_json::from_str(r#"{"error": "Invalid username or password"}"#).unwrap();
    assert_eq!(body.error, "Invalid username or password");
}

// =============================================================
// Generation bodies
// =============================================================

#[test]
fn logo_request_serializes_camel_case() {
    let request = LogoRequest {
        company_name: "Acme".to_owned(),
        sector: "robotics".to_owned(),
        style: "Minimalist".to_owned(),
        color: "1a2b3c".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["companyName"], "Acme");
    assert!(value.get("company_name").is_none());
}

#[test]
fn post_request_serializes_word_count_camel_case() {
    let request = PostRequest {
        topic: "product launch".to_owned(),
        format: "blog post".to_owned(),
        tone: "professional".to_owned(),
        word_count: 300,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["wordCount"], 300);
    assert!(value.get("word_count").is_none());
}

#[test]
fn saved_images_tolerates_missing_optional_fields() {
    let body: SavedImages = serde_json::from_str(
        r#"{"images": [{"id": 7, "prompt": "a fox", "image_url": "https://img.example/7.png"}]}"#,
    )
    .unwrap();
    assert_eq!(body.images.len(), 1);
    assert_eq!(body.images[0].id, 7);
    assert!(body.images[0].style.is_none());
    assert!(body.images[0].created_at.is_none());
}

#[test]
fn saved_images_defaults_to_empty_list() {
    let body: SavedImages = serde_json::from_str("{}").unwrap();
    assert!(body.images.is_empty());
}

#[test]
fn chat_response_parses_reply_and_model() {
    let body: ChatResponse =
        serde_json::from_str(r#"{"response": "hello!", "model": "gpt-4o"}"#).unwrap();
    assert_eq!(body.response, "hello!");
    assert_eq!(body.model, "gpt-4o");
}

#[test]
fn video_response_parses_url_and_id() {
    let body: VideoResponse =
        serde_json::from_str(r#"{"video_url": "https://vid.example/3.mp4", "video_id": 3}"#)
            .unwrap();
    assert_eq!(body.video_url, "https://vid.example/3.mp4");
    assert_eq!(body.video_id, 3);
}

// =============================================================
// Post history bodies
// =============================================================

#[test]
fn saved_post_parses_full_entry() {
    let body: SavedPost = serde_json::from_str(
        r#"{
            "id": 12,
            "topic": "launch week",
            "content": "We are live.",
            "format": "Tweet thread",
            "tone": "Bold",
            "word_count": 100,
            "created_at": "2026-08-01T10:00:00"
        }"#,
    )
    .unwrap();
    assert_eq!(body.id, 12);
    assert_eq!(body.topic, "launch week");
    assert_eq!(body.word_count, 100);
    assert_eq!(body.tone.as_deref(), Some("Bold"));
}

#[test]
fn saved_post_tolerates_missing_optional_fields() {
    // Entries saved without a length come back with `word_count` absent
    // or zero; both read as zero here.
    let body: SavedPost =
        serde_json::from_str(r#"{"id": 3, "topic": "t", "content": "c"}"#).unwrap();
    assert_eq!(body.word_count, 0);
    assert!(body.format.is_none());
    assert!(body.created_at.is_none());
}

#[test]
fn saved_posts_defaults_to_empty_list() {
    let body: SavedPosts = serde_json::from_str("{}").unwrap();
    assert!(body.posts.is_empty());
}

#[test]
fn post_save_request_serializes_word_count_camel_case() {
    // The save endpoint reads `wordCount` even though history entries
    // come back with `word_count`.
    let request = PostSaveRequest {
        topic: "launch week".to_owned(),
        content: "We are live.".to_owned(),
        format: "Tweet thread".to_owned(),
        tone: "Bold".to_owned(),
        word_count: 100,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["wordCount"], 100);
    assert!(value.get("word_count").is_none());
}

#[test]
fn post_update_request_carries_topic_and_content() {
    let request = PostUpdateRequest {
        topic: "launch week".to_owned(),
        content: "We are live, for real this time.".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["topic"], "launch week");
    assert_eq!(value["content"], "We are live, for real this time.");
}
