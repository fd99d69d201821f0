use chrono::{NaiveDate, NaiveDateTime};
use flight_inventory::models::flight::Flight;
use flight_inventory::models::inventory::SeatInventory;
use rust_decimal::Decimal;

pub fn departure() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn arrival() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(14, 45, 0)
        .unwrap()
}

// A flight that passes validation: 150 economy, 20 business, 8 first
pub fn sample_flight() -> Flight {
    Flight::new(
        "AC101",
        "Maple Air",
        "YYZ",
        "Toronto",
        "YVR",
        "Vancouver",
        departure(),
        arrival(),
        "Boeing 787-9",
        Decimal::new(45000, 2), // 450.00
        SeatInventory::new(150, 20, 8),
    )
}

// Inventory with availability already opened
pub fn opened_inventory(economy: i32, business: i32, first: i32) -> SeatInventory {
    let mut seats = SeatInventory::new(economy, business, first);
    seats.initialize();
    seats
}
