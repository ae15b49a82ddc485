use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.signature")
}

#[test]
fn decode_claims_reads_all_fields() {
    let token = token_with_payload(r#"{"id":5,"email":"admin@example.com","role":"ADMINISTRATOR","exp":1900000000}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(
        claims,
        TokenClaims {
            id: Some(5),
            email: Some("admin@example.com".to_owned()),
            role: "ADMINISTRATOR".to_owned(),
            exp: Some(1_900_000_000),
        }
    );
}

#[test]
fn decode_claims_only_requires_role() {
    let token = token_with_payload(r#"{"role":"MANAGER"}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role, "MANAGER");
    assert!(claims.id.is_none());
}

#[test]
fn decode_claims_tolerates_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode("{}");
    let body = format!("{}==", URL_SAFE_NO_PAD.encode(r#"{"role":"X"}"#));
    let claims = decode_claims(&format!("{header}.{body}.sig")).unwrap();
    assert_eq!(claims.role, "X");
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert!(matches!(decode_claims("abc"), Err(ClaimsError::Malformed)));
    assert!(matches!(decode_claims("a.b"), Err(ClaimsError::Malformed)));
    assert!(matches!(decode_claims("a.b.c.d"), Err(ClaimsError::Malformed)));
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(ClaimsError::Base64(_))));
}

#[test]
fn decode_claims_rejects_payload_without_role() {
    let token = token_with_payload(r#"{"id":5}"#);
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Json(_))));
}
