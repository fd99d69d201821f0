use flight_inventory::utils::validation::{validate_flight, FieldError};
use rust_decimal::Decimal;

mod common {
    pub mod test_utils;
}
use common::test_utils::sample_flight;

fn messages_for<'a>(errors: &'a [FieldError], field: &str) -> Vec<&'a str> {
    errors
        .iter()
        .filter(|error| error.field == field)
        .map(|error| error.message.as_str())
        .collect()
}

#[test]
fn test_valid_flight_passes() {
    let mut flight = sample_flight();
    flight.business_price = Some(Decimal::new(120000, 2));
    flight.gate = Some("B23".to_string());
    flight.notes = Some("Meal service in all classes".to_string());

    assert!(validate_flight(&flight).is_ok());
}

#[test]
fn test_blank_flight_number_is_rejected() {
    let mut flight = sample_flight();
    flight.flight_number = "   ".to_string();

    let errors = validate_flight(&flight).unwrap_err();
    assert_eq!(
        messages_for(&errors, "flight_number"),
        vec!["must not be blank"]
    );
}

#[test]
fn test_overlong_flight_number_is_rejected() {
    let mut flight = sample_flight();
    flight.flight_number = "AC101-EXTRA".to_string(); // 11 chars

    let errors = validate_flight(&flight).unwrap_err();
    assert_eq!(
        messages_for(&errors, "flight_number"),
        vec!["Flight number must be at most 10 characters"]
    );
}

#[test]
fn test_non_positive_economy_price_is_rejected() {
    let mut flight = sample_flight();
    flight.economy_price = Decimal::ZERO;

    let errors = validate_flight(&flight).unwrap_err();
    assert_eq!(
        messages_for(&errors, "economy_price"),
        vec!["price must be greater than 0"]
    );
}

#[test]
fn test_optional_prices_only_checked_when_set() {
    let mut flight = sample_flight();
    flight.business_price = None;
    flight.first_class_price = None;
    assert!(validate_flight(&flight).is_ok());

    flight.business_price = Some(Decimal::new(-100, 2));
    let errors = validate_flight(&flight).unwrap_err();
    assert_eq!(
        messages_for(&errors, "business_price"),
        vec!["price must be greater than 0"]
    );
}

#[test]
fn test_seat_totals_are_bounded_below() {
    let mut flight = sample_flight();
    flight.seats.economy_seats = 0;
    flight.seats.business_seats = -1;

    let errors = validate_flight(&flight).unwrap_err();
    assert_eq!(
        messages_for(&errors, "seats.economy_seats"),
        vec!["Economy seats must be at least 1"]
    );
    assert_eq!(
        messages_for(&errors, "seats.business_seats"),
        vec!["Business seats cannot be negative"]
    );
}

#[test]
fn test_overlong_notes_are_rejected() {
    let mut flight = sample_flight();
    flight.notes = Some("x".repeat(501));

    let errors = validate_flight(&flight).unwrap_err();
    assert_eq!(
        messages_for(&errors, "notes"),
        vec!["Notes must be at most 500 characters"]
    );

    flight.notes = Some("x".repeat(500));
    assert!(validate_flight(&flight).is_ok());
}

#[test]
fn test_all_failures_are_reported_together() {
    let mut flight = sample_flight();
    flight.airline = String::new();
    flight.origin_airport = "TOOLONGCODE".to_string();
    flight.economy_price = Decimal::new(-1, 0);
    flight.seats.first_class_seats = -3;

    let errors = validate_flight(&flight).unwrap_err();

    let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();
    assert!(fields.contains(&"airline"));
    assert!(fields.contains(&"origin_airport"));
    assert!(fields.contains(&"economy_price"));
    assert!(fields.contains(&"seats.first_class_seats"));

    // Output is sorted by field for stable reporting
    let mut sorted = fields.clone();
    sorted.sort();
    assert_eq!(fields, sorted);
}

#[test]
fn test_blank_optional_fields_are_allowed() {
    let mut flight = sample_flight();
    flight.gate = None;
    flight.terminal = None;
    flight.notes = None;

    assert!(validate_flight(&flight).is_ok());
}
