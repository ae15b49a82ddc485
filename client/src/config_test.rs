use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes_and_whitespace() {
    assert_eq!(normalize_base_url(" https://api.example.test/v1// "), "https://api.example.test/v1");
}

#[test]
fn normalize_base_url_keeps_empty_value() {
    assert_eq!(normalize_base_url(""), "");
}

#[test]
fn join_url_uses_single_separator() {
    assert_eq!(join_url("https://api.example.test", "/hotels"), "https://api.example.test/hotels");
    assert_eq!(join_url("https://api.example.test", "hotels/3"), "https://api.example.test/hotels/3");
}

#[test]
fn join_url_without_base_stays_origin_relative() {
    assert_eq!(join_url("", "/auth/login"), "/auth/login");
    assert_eq!(join_url("", "clients"), "/clients");
}
