use super::*;

#[test]
fn envelope_reads_payload_and_optional_metadata() {
    let envelope: ApiEnvelope<Vec<i64>> =
        serde_json::from_str(r#"{"data":[1,2],"message":"ok","status":200}"#).unwrap();
    assert_eq!(envelope.data, vec![1, 2]);
    assert_eq!(envelope.message.as_deref(), Some("ok"));
    assert_eq!(envelope.status, Some(200));

    let bare: ApiEnvelope<String> = serde_json::from_str(r#"{"data":"Bearer t"}"#).unwrap();
    assert_eq!(bare.data, "Bearer t");
    assert!(bare.message.is_none());
}

#[test]
fn hotel_accepts_null_text_columns() {
    let hotel: Hotel = serde_json::from_str(
        r#"{"id":3,"name":"Grand","location":"Kyiv","description":null,"policy":null,"stars":4}"#,
    )
    .unwrap();
    assert_eq!(hotel.id, 3);
    assert!(hotel.description.is_none());
    assert_eq!(hotel.stars, 4);
}

#[test]
fn client_defaults_missing_fields() {
    let client: Client =
        serde_json::from_str(r#"{"id":7,"first_name":"Ada","last_name":"Byron","email":"ada@example.com"}"#).unwrap();
    assert!(client.is_registered);
    assert!(client.bookings.is_empty());
    assert!(client.phone.is_none());
    assert!(client.middle_name.is_none());
}

#[test]
fn client_reads_bookings() {
    let client: Client = serde_json::from_str(
        r#"{
            "id": 7,
            "first_name": "Ada",
            "last_name": "Byron",
            "email": "ada@example.com",
            "phone": "+380000000",
            "is_registered": false,
            "bookings": [{
                "booking_id": 11,
                "check_in": "2025-01-02",
                "check_out": "2025-01-05",
                "guests_count": 2,
                "payment_method": "card",
                "status": "CONFIRMED"
            }]
        }"#,
    )
    .unwrap();
    assert!(!client.is_registered);
    assert_eq!(client.bookings.len(), 1);
    assert_eq!(client.bookings[0].booking_id, 11);
    assert_eq!(client.bookings[0].guests_count, 2);
}

#[test]
fn client_full_name_skips_blank_middle_name() {
    let mut client: Client =
        serde_json::from_str(r#"{"id":1,"first_name":"Ada","last_name":"Byron","email":"a@b.co"}"#).unwrap();
    assert_eq!(client.full_name(), "Ada Byron");
    client.middle_name = Some("  ".to_owned());
    assert_eq!(client.full_name(), "Ada Byron");
    client.middle_name = Some("King".to_owned());
    assert_eq!(client.full_name(), "Ada King Byron");
}

#[test]
fn client_payload_serializes_snake_case() {
    let payload = ClientPayload {
        first_name: "Ada".to_owned(),
        last_name: "Byron".to_owned(),
        middle_name: String::new(),
        email: "ada@example.com".to_owned(),
        phone: "+380000000".to_owned(),
        is_registered: true,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "first_name": "Ada",
            "last_name": "Byron",
            "middle_name": "",
            "email": "ada@example.com",
            "phone": "+380000000",
            "is_registered": true
        })
    );
}

#[test]
fn client_list_decodes_camel_case_records() {
    let clients: Vec<Client> = crate::net::gateway::decode_envelope(
        r#"{"data":[{
            "id": 1,
            "firstName": "Ann",
            "lastName": "Lee",
            "middleName": "",
            "email": "ann@example.com",
            "phone": "+380111",
            "address": "Kyiv",
            "isRegistered": false,
            "bookings": [{
                "booking_id": 5,
                "check_in": "2025-03-01",
                "check_out": "2025-03-04",
                "guests_count": 1,
                "payment_method": "cash",
                "status": "PENDING"
            }]
        }]}"#,
    )
    .unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].first_name, "Ann");
    assert_eq!(clients[0].last_name, "Lee");
    assert_eq!(clients[0].full_name(), "Ann Lee");
    assert!(!clients[0].is_registered);
    assert_eq!(clients[0].bookings[0].booking_id, 5);
}
