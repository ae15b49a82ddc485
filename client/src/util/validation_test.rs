use super::*;

#[test]
fn is_valid_email_accepts_common_addresses() {
    assert!(is_valid_email("admin@example.com"));
    assert!(is_valid_email("  first.last+tag@mail.example.co.uk "));
}

#[test]
fn is_valid_email_rejects_malformed_addresses() {
    for bad in ["", "admin", "admin@", "@example.com", "admin@example", "a@b@c.com", "a b@c.com", "a@.com", "a@c."] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  Grand  "), Some("Grand".to_owned()));
    assert_eq!(required("   "), None);
    assert_eq!(required(""), None);
}
