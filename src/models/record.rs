use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::flight::{Flight, FlightStatus};
use crate::models::inventory::SeatInventory;
use crate::utils::error::AppError;

// The flat row shape of the flights table. Status is stored as its
// string form and the seat inventory is flattened into six columns;
// this struct is the round-trip contract with storage.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FlightRecord {
    pub id: i64,
    pub flight_number: String,
    pub airline: String,
    pub origin_airport: String,
    pub origin_city: String,
    pub destination_airport: String,
    pub destination_city: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub aircraft_type: String,
    pub economy_price: Decimal,
    pub business_price: Option<Decimal>,
    pub first_class_price: Option<Decimal>,
    pub economy_seats: i32,
    pub business_seats: i32,
    pub first_class_seats: i32,
    pub economy_available: i32,
    pub business_available: i32,
    pub first_class_available: i32,
    pub status: String,
    pub gate: Option<String>,
    pub terminal: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = AppError;

    fn try_from(record: FlightRecord) -> Result<Self, Self::Error> {
        let status = FlightStatus::from_str(&record.status).map_err(|_| {
            AppError::DatabaseError(format!("unknown flight status: {}", record.status))
        })?;

        Ok(Flight {
            id: Some(record.id),
            flight_number: record.flight_number,
            airline: record.airline,
            origin_airport: record.origin_airport,
            origin_city: record.origin_city,
            destination_airport: record.destination_airport,
            destination_city: record.destination_city,
            departure_time: record.departure_time,
            arrival_time: record.arrival_time,
            aircraft_type: record.aircraft_type,
            economy_price: record.economy_price,
            business_price: record.business_price,
            first_class_price: record.first_class_price,
            seats: SeatInventory {
                economy_seats: record.economy_seats,
                business_seats: record.business_seats,
                first_class_seats: record.first_class_seats,
                economy_available: record.economy_available,
                business_available: record.business_available,
                first_class_available: record.first_class_available,
            },
            status,
            gate: record.gate,
            terminal: record.terminal,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl Flight {
    pub fn to_record(&self) -> FlightRecord {
        FlightRecord {
            // 0 marks a record that has not been inserted yet; inserts
            // never bind this field
            id: self.id.unwrap_or(0),
            flight_number: self.flight_number.clone(),
            airline: self.airline.clone(),
            origin_airport: self.origin_airport.clone(),
            origin_city: self.origin_city.clone(),
            destination_airport: self.destination_airport.clone(),
            destination_city: self.destination_city.clone(),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            aircraft_type: self.aircraft_type.clone(),
            economy_price: self.economy_price,
            business_price: self.business_price,
            first_class_price: self.first_class_price,
            economy_seats: self.seats.economy_seats,
            business_seats: self.seats.business_seats,
            first_class_seats: self.seats.first_class_seats,
            economy_available: self.seats.economy_available,
            business_available: self.seats.business_available,
            first_class_available: self.seats.first_class_available,
            status: self.status.to_string(),
            gate: self.gate.clone(),
            terminal: self.terminal.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
