use super::*;

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(
        endpoint("/verify-session"),
        "http://localhost:5000/verify-session"
    );
    assert_eq!(endpoint("/post/generate"), "http://localhost:5000/post/generate");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn signup_failed_message_formats_status() {
    assert_eq!(signup_failed_message(409), "signup failed: 409");
}

#[test]
fn logout_failed_message_formats_status() {
    assert_eq!(logout_failed_message(500), "logout failed: 500");
}

#[test]
fn generation_failed_message_formats_kind_and_status() {
    assert_eq!(
        generation_failed_message("logo", 502),
        "logo generation failed: 502"
    );
    assert_eq!(
        generation_failed_message("video", 400),
        "video generation failed: 400"
    );
}

#[test]
fn image_delete_failed_message_formats_status() {
    assert_eq!(image_delete_failed_message(404), "image delete failed: 404");
}

#[test]
fn post_action_failed_message_formats_action_and_status() {
    assert_eq!(post_action_failed_message("save", 400), "post save failed: 400");
    assert_eq!(
        post_action_failed_message("delete", 404),
        "post delete failed: 404"
    );
}

#[test]
fn server_error_or_prefers_server_message() {
    let body = Some(ErrorResponse {
        error: "Invalid username or password".to_owned(),
    });
    assert_eq!(
        server_error_or(body, login_failed_message(401)),
        "Invalid username or password"
    );
}

#[test]
fn server_error_or_falls_back_without_body() {
    assert_eq!(
        server_error_or(None, login_failed_message(401)),
        "login failed: 401"
    );
}

#[test]
fn transport_failure_message_matches_ui_copy() {
    // Shown verbatim in the credential forms; wording changes are visible.
    assert_eq!(NETWORK_ERROR_MESSAGE, "Network error. Please try again later.");
}
