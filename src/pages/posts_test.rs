use super::*;

#[test]
fn parse_word_count_reads_picker_values() {
    assert_eq!(parse_word_count("100"), 100);
    assert_eq!(parse_word_count("1000"), 1000);
}

#[test]
fn parse_word_count_trims_whitespace() {
    assert_eq!(parse_word_count(" 600 "), 600);
}

#[test]
fn parse_word_count_falls_back_on_garbage() {
    assert_eq!(parse_word_count(""), DEFAULT_WORD_COUNT);
    assert_eq!(parse_word_count("lots"), DEFAULT_WORD_COUNT);
    assert_eq!(parse_word_count("-5"), DEFAULT_WORD_COUNT);
}
