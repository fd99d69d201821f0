use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// A booking references exactly one flight by surrogate key. Deleting the
// flight cascades to its bookings in storage; in memory the collection is
// only ever materialized through FlightService::bookings_for_flight.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub flight_id: i64,
    pub passenger_name: String,
    pub travel_class: String,
    pub seats: i32,
    pub price_paid: Decimal,
    pub booked_at: NaiveDateTime,
}
