use super::*;

fn input(name: &str, location: &str, stars: &str) -> HotelFormInput {
    HotelFormInput {
        name: name.to_owned(),
        location: location.to_owned(),
        stars: stars.to_owned(),
        description: "  Sea view ".to_owned(),
        policy: String::new(),
    }
}

#[test]
fn validate_hotel_input_builds_trimmed_payload() {
    let payload = validate_hotel_input(&input(" Grand ", "Lisbon", "4")).unwrap();
    assert_eq!(
        payload,
        HotelPayload {
            name: "Grand".to_owned(),
            location: "Lisbon".to_owned(),
            description: "Sea view".to_owned(),
            policy: String::new(),
            stars: 4,
        }
    );
}

#[test]
fn validate_hotel_input_requires_name_and_location() {
    let errors = validate_hotel_input(&input("  ", "", "3")).unwrap_err();
    assert_eq!(errors.name, Some("Hotel name is required"));
    assert_eq!(errors.location, Some("Location is required"));
    assert_eq!(errors.stars, None);
}

#[test]
fn validate_hotel_input_checks_star_bounds() {
    assert_eq!(validate_hotel_input(&input("A", "B", "0")).unwrap_err().stars, Some("Min 1 star"));
    assert_eq!(validate_hotel_input(&input("A", "B", "")).unwrap_err().stars, Some("Min 1 star"));
    assert_eq!(validate_hotel_input(&input("A", "B", "6")).unwrap_err().stars, Some("Max 5 stars"));
    assert_eq!(
        validate_hotel_input(&input("A", "B", "three")).unwrap_err().stars,
        Some("Stars must be a number")
    );
}

#[test]
fn validate_hotel_input_accepts_boundary_stars() {
    assert_eq!(validate_hotel_input(&input("A", "B", "1")).unwrap().stars, 1);
    assert_eq!(validate_hotel_input(&input("A", "B", " 5 ")).unwrap().stars, 5);
}

#[test]
fn from_hotel_fills_optional_fields() {
    let hotel = Hotel {
        id: 7,
        name: "Grand".to_owned(),
        location: "Lisbon".to_owned(),
        description: None,
        policy: Some("No pets".to_owned()),
        stars: 5,
    };
    let form = HotelFormInput::from_hotel(&hotel);
    assert_eq!(form.stars, "5");
    assert_eq!(form.description, "");
    assert_eq!(form.policy, "No pets");
}
