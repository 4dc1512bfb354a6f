#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_username_is_none_in_native_tests() {
    assert!(load_username().is_none());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_username("alice");
    clear_username();
    assert!(load_username().is_none());
}
