use sqlx::MySqlPool;

use crate::utils::error::AppResult;

// Explicit DDL for the flight store. Column bounds mirror the field
// constraints in utils::validation; status defaults to SCHEDULED and
// the *_available columns persist the derived inventory state.
pub const CREATE_FLIGHTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS flights (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    flight_number VARCHAR(10) NOT NULL UNIQUE,
    airline VARCHAR(50) NOT NULL,
    origin_airport VARCHAR(10) NOT NULL,
    origin_city VARCHAR(100) NOT NULL,
    destination_airport VARCHAR(10) NOT NULL,
    destination_city VARCHAR(100) NOT NULL,
    departure_time DATETIME NOT NULL,
    arrival_time DATETIME NOT NULL,
    aircraft_type VARCHAR(50) NOT NULL,
    economy_price DECIMAL(10, 2) NOT NULL,
    business_price DECIMAL(10, 2),
    first_class_price DECIMAL(10, 2),
    economy_seats INT NOT NULL,
    business_seats INT NOT NULL DEFAULT 0,
    first_class_seats INT NOT NULL DEFAULT 0,
    economy_available INT NOT NULL DEFAULT 0,
    business_available INT NOT NULL DEFAULT 0,
    first_class_available INT NOT NULL DEFAULT 0,
    status VARCHAR(20) NOT NULL DEFAULT 'SCHEDULED',
    gate VARCHAR(10),
    terminal VARCHAR(10),
    notes VARCHAR(500),
    created_at DATETIME NOT NULL,
    updated_at DATETIME
)
"#;

// Deleting a flight deletes its bookings
pub const CREATE_BOOKINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bookings (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    flight_id BIGINT NOT NULL,
    passenger_name VARCHAR(100) NOT NULL,
    travel_class VARCHAR(10) NOT NULL,
    seats INT NOT NULL,
    price_paid DECIMAL(10, 2) NOT NULL,
    booked_at DATETIME NOT NULL,
    CONSTRAINT fk_bookings_flight FOREIGN KEY (flight_id)
        REFERENCES flights (id) ON DELETE CASCADE
)
"#;

pub async fn create_all(pool: &MySqlPool) -> AppResult<()> {
    sqlx::query(CREATE_FLIGHTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_BOOKINGS_TABLE).execute(pool).await?;
    Ok(())
}
