use super::*;

#[test]
fn default_transcript_is_empty_and_idle() {
    let chat = ChatState::default();
    assert!(chat.messages.is_empty());
    assert!(!chat.pending);
}

#[test]
fn push_user_appends_and_marks_pending() {
    let mut chat = ChatState::default();
    chat.push_user("m1".to_owned(), "hello".to_owned());
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].role, MessageRole::User);
    assert_eq!(chat.messages[0].content, "hello");
    assert!(chat.pending);
}

#[test]
fn push_assistant_appends_and_clears_pending() {
    let mut chat = ChatState::default();
    chat.push_user("m1".to_owned(), "hello".to_owned());
    chat.push_assistant("m2".to_owned(), "hi there".to_owned());
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[1].role, MessageRole::Assistant);
    assert!(!chat.pending);
}

#[test]
fn failed_round_trip_keeps_the_user_message() {
    let mut chat = ChatState::default();
    chat.push_user("m1".to_owned(), "hello".to_owned());
    chat.fail_pending();
    assert_eq!(chat.messages.len(), 1);
    assert!(!chat.pending);
}

#[test]
fn role_css_modifiers_are_distinct() {
    assert_eq!(MessageRole::User.css_modifier(), "user");
    assert_eq!(MessageRole::Assistant.css_modifier(), "assistant");
}
