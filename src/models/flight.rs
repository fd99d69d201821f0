use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};
use validator::Validate;

use crate::models::inventory::{SeatInventory, TravelClass};
use crate::utils::validation::{not_blank, positive_price};

// Flight lifecycle states; any value may be set at any time by the
// owning application, there are no transition rules here
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    #[default]
    Scheduled,
    Boarding,
    Departed,
    InFlight,
    Arrived,
    Delayed,
    Cancelled,
}

// The flight aggregate root. Identity is the flight number, which is
// unique in storage; bookings reference the surrogate id and are loaded
// as a derived view, never held on this struct.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Flight {
    pub id: Option<i64>,

    #[validate(
        custom(function = not_blank),
        length(max = 10, message = "Flight number must be at most 10 characters")
    )]
    pub flight_number: String,

    #[validate(
        custom(function = not_blank),
        length(max = 50, message = "Airline name must be at most 50 characters")
    )]
    pub airline: String,

    #[validate(
        custom(function = not_blank),
        length(max = 10, message = "Origin airport code must be at most 10 characters")
    )]
    pub origin_airport: String,

    #[validate(
        custom(function = not_blank),
        length(max = 100, message = "Origin city must be at most 100 characters")
    )]
    pub origin_city: String,

    #[validate(
        custom(function = not_blank),
        length(max = 10, message = "Destination airport code must be at most 10 characters")
    )]
    pub destination_airport: String,

    #[validate(
        custom(function = not_blank),
        length(max = 100, message = "Destination city must be at most 100 characters")
    )]
    pub destination_city: String,

    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,

    #[validate(
        custom(function = not_blank),
        length(max = 50, message = "Aircraft type must be at most 50 characters")
    )]
    pub aircraft_type: String,

    #[validate(custom(function = positive_price))]
    pub economy_price: Decimal,

    // None means the class is not offered on this flight
    #[validate(custom(function = positive_price))]
    pub business_price: Option<Decimal>,

    #[validate(custom(function = positive_price))]
    pub first_class_price: Option<Decimal>,

    #[validate(nested)]
    pub seats: SeatInventory,

    pub status: FlightStatus,

    #[validate(length(max = 10, message = "Gate must be at most 10 characters"))]
    pub gate: Option<String>,

    #[validate(length(max = 10, message = "Terminal must be at most 10 characters"))]
    pub terminal: Option<String>,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,

    // Stamped by the lifecycle functions; created_at is never rewritten
    // after the first stamp
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Flight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_number: &str,
        airline: &str,
        origin_airport: &str,
        origin_city: &str,
        destination_airport: &str,
        destination_city: &str,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
        aircraft_type: &str,
        economy_price: Decimal,
        seats: SeatInventory,
    ) -> Self {
        Flight {
            id: None,
            flight_number: flight_number.to_string(),
            airline: airline.to_string(),
            origin_airport: origin_airport.to_string(),
            origin_city: origin_city.to_string(),
            destination_airport: destination_airport.to_string(),
            destination_city: destination_city.to_string(),
            departure_time,
            arrival_time,
            aircraft_type: aircraft_type.to_string(),
            economy_price,
            business_price: None,
            first_class_price: None,
            seats,
            status: FlightStatus::default(),
            gate: None,
            terminal: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    // Insert-time lifecycle point: stamp both timestamps and open the
    // seat inventory. The persistence layer calls this once per record.
    pub fn stamp_created(&mut self, now: NaiveDateTime) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
        self.seats.initialize();
    }

    // Update-time lifecycle point: refresh updated_at only
    pub fn stamp_updated(&mut self, now: NaiveDateTime) {
        self.updated_at = Some(now);
    }

    // Price lookup per class. Unrecognized classes fall back to the
    // economy price rather than erroring; None means the class exists
    // but is not offered on this flight.
    pub fn price_for_class(&self, travel_class: &str) -> Option<Decimal> {
        match TravelClass::parse(travel_class) {
            Some(TravelClass::Business) => self.business_price,
            Some(TravelClass::First) => self.first_class_price,
            _ => Some(self.economy_price),
        }
    }
}

// Flights are equal when their flight numbers are equal
impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.flight_number == other.flight_number
    }
}

impl Eq for Flight {}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} ({} -> {}) departing {} [{}]",
            self.flight_number,
            self.origin_city,
            self.destination_city,
            self.departure_time,
            self.status
        )
    }
}
