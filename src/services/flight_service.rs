use chrono::Utc;
use sqlx::MySqlPool;

use crate::models::booking::Booking;
use crate::models::flight::Flight;
use crate::models::record::FlightRecord;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::validate_flight;

pub struct FlightService {
    pool: MySqlPool,
}

impl FlightService {
    pub fn new(pool: MySqlPool) -> Self {
        FlightService { pool }
    }

    // Insert a new flight record
    pub async fn create_flight(&self, mut flight: Flight) -> AppResult<Flight> {
        check_valid(&flight)?;

        // Check if flight number already exists
        let existing = sqlx::query("SELECT id FROM flights WHERE flight_number = ?")
            .bind(&flight.flight_number)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::Conflict("Flight number already exists".into()));
        }

        // Insert-time lifecycle point: stamps timestamps and opens the inventory
        flight.stamp_created(Utc::now().naive_utc());

        let record = flight.to_record();
        let result = sqlx::query(
            r#"
            INSERT INTO flights (
                flight_number, airline, origin_airport, origin_city,
                destination_airport, destination_city, departure_time, arrival_time,
                aircraft_type, economy_price, business_price, first_class_price,
                economy_seats, business_seats, first_class_seats,
                economy_available, business_available, first_class_available,
                status, gate, terminal, notes, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.flight_number)
        .bind(&record.airline)
        .bind(&record.origin_airport)
        .bind(&record.origin_city)
        .bind(&record.destination_airport)
        .bind(&record.destination_city)
        .bind(record.departure_time)
        .bind(record.arrival_time)
        .bind(&record.aircraft_type)
        .bind(record.economy_price)
        .bind(record.business_price)
        .bind(record.first_class_price)
        .bind(record.economy_seats)
        .bind(record.business_seats)
        .bind(record.first_class_seats)
        .bind(record.economy_available)
        .bind(record.business_available)
        .bind(record.first_class_available)
        .bind(&record.status)
        .bind(&record.gate)
        .bind(&record.terminal)
        .bind(&record.notes)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        flight.id = Some(result.last_insert_id() as i64);
        Ok(flight)
    }

    // Update an existing flight record. created_at is immutable and
    // never rewritten here.
    pub async fn update_flight(&self, mut flight: Flight) -> AppResult<Flight> {
        let id = flight.id.ok_or_else(|| {
            AppError::ValidationError("Flight has not been persisted yet".into())
        })?;

        check_valid(&flight)?;

        // Update-time lifecycle point
        flight.stamp_updated(Utc::now().naive_utc());

        let record = flight.to_record();
        let result = sqlx::query(
            r#"
            UPDATE flights SET
                flight_number = ?, airline = ?, origin_airport = ?, origin_city = ?,
                destination_airport = ?, destination_city = ?, departure_time = ?,
                arrival_time = ?, aircraft_type = ?, economy_price = ?,
                business_price = ?, first_class_price = ?, economy_seats = ?,
                business_seats = ?, first_class_seats = ?, economy_available = ?,
                business_available = ?, first_class_available = ?, status = ?,
                gate = ?, terminal = ?, notes = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.flight_number)
        .bind(&record.airline)
        .bind(&record.origin_airport)
        .bind(&record.origin_city)
        .bind(&record.destination_airport)
        .bind(&record.destination_city)
        .bind(record.departure_time)
        .bind(record.arrival_time)
        .bind(&record.aircraft_type)
        .bind(record.economy_price)
        .bind(record.business_price)
        .bind(record.first_class_price)
        .bind(record.economy_seats)
        .bind(record.business_seats)
        .bind(record.first_class_seats)
        .bind(record.economy_available)
        .bind(record.business_available)
        .bind(record.first_class_available)
        .bind(&record.status)
        .bind(&record.gate)
        .bind(&record.terminal)
        .bind(&record.notes)
        .bind(record.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Flight not found".into()));
        }

        Ok(flight)
    }

    pub async fn find_by_flight_number(&self, flight_number: &str) -> AppResult<Flight> {
        let record = sqlx::query_as::<_, FlightRecord>(
            "SELECT * FROM flights WHERE flight_number = ?",
        )
        .bind(flight_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Flight not found".into()))?;

        Flight::try_from(record)
    }

    // Bookings cascade-delete with the flight row
    pub async fn delete_flight(&self, flight_number: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM flights WHERE flight_number = ?")
            .bind(flight_number)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Flight not found".into()));
        }

        Ok(())
    }

    // Lazily loaded view of the flight's bookings
    pub async fn bookings_for_flight(&self, flight_id: i64) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE flight_id = ? ORDER BY booked_at",
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    // Clamped reservation persisted back to the row. Callers that need
    // to detect insufficiency gate on has_available first; the mutation
    // itself never rejects. Plain read-modify-write, no locking.
    pub async fn reserve_seats(
        &self,
        flight_number: &str,
        travel_class: &str,
        seats: i32,
    ) -> AppResult<Flight> {
        let mut flight = self.find_by_flight_number(flight_number).await?;
        flight.seats.reserve(travel_class, seats);
        self.update_flight(flight).await
    }

    pub async fn release_seats(
        &self,
        flight_number: &str,
        travel_class: &str,
        seats: i32,
    ) -> AppResult<Flight> {
        let mut flight = self.find_by_flight_number(flight_number).await?;
        flight.seats.release(travel_class, seats);
        self.update_flight(flight).await
    }
}

fn check_valid(flight: &Flight) -> AppResult<()> {
    validate_flight(flight).map_err(|errors| {
        let detail = errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("; ");
        AppError::ValidationError(detail)
    })
}
