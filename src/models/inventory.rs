use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use validator::Validate;

// Travel classes are independent seat pools with independent pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    Economy,
    Business,
    First,
}

impl TravelClass {
    // Unknown class names fail closed
    pub fn parse(value: &str) -> Option<TravelClass> {
        TravelClass::from_str(value).ok()
    }
}

// Per-class seat counters for one flight, kept within [0, total].
// Reserve and release clamp instead of erroring, so callers must gate
// on has_available before reserving if they care about the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SeatInventory {
    #[validate(range(min = 1, message = "Economy seats must be at least 1"))]
    pub economy_seats: i32,
    #[validate(range(min = 0, message = "Business seats cannot be negative"))]
    pub business_seats: i32,
    #[validate(range(min = 0, message = "First class seats cannot be negative"))]
    pub first_class_seats: i32,
    pub economy_available: i32,
    pub business_available: i32,
    pub first_class_available: i32,
}

impl SeatInventory {
    // Availability starts at zero until initialize() opens the inventory
    pub fn new(economy_seats: i32, business_seats: i32, first_class_seats: i32) -> Self {
        SeatInventory {
            economy_seats,
            business_seats,
            first_class_seats,
            economy_available: 0,
            business_available: 0,
            first_class_available: 0,
        }
    }

    // Called exactly once, at record creation. Calling it again resets
    // availability and erases prior reservations.
    pub fn initialize(&mut self) {
        self.economy_available = self.economy_seats;
        self.business_available = self.business_seats;
        self.first_class_available = self.first_class_seats;
    }

    pub fn total_for(&self, travel_class: TravelClass) -> i32 {
        match travel_class {
            TravelClass::Economy => self.economy_seats,
            TravelClass::Business => self.business_seats,
            TravelClass::First => self.first_class_seats,
        }
    }

    pub fn available_for(&self, travel_class: TravelClass) -> i32 {
        match travel_class {
            TravelClass::Economy => self.economy_available,
            TravelClass::Business => self.business_available,
            TravelClass::First => self.first_class_available,
        }
    }

    // Pure query; unrecognized class returns false
    pub fn has_available(&self, travel_class: &str, requested_seats: i32) -> bool {
        match TravelClass::parse(travel_class) {
            Some(class) => self.available_for(class) >= requested_seats,
            None => false,
        }
    }

    // Decrease availability, floored at 0; unrecognized class is a no-op
    pub fn reserve(&mut self, travel_class: &str, seats: i32) {
        match TravelClass::parse(travel_class) {
            Some(TravelClass::Economy) => {
                self.economy_available = (self.economy_available - seats).max(0);
            }
            Some(TravelClass::Business) => {
                self.business_available = (self.business_available - seats).max(0);
            }
            Some(TravelClass::First) => {
                self.first_class_available = (self.first_class_available - seats).max(0);
            }
            None => {}
        }
    }

    // Increase availability, capped at the class total; unrecognized class is a no-op
    pub fn release(&mut self, travel_class: &str, seats: i32) {
        match TravelClass::parse(travel_class) {
            Some(TravelClass::Economy) => {
                self.economy_available = (self.economy_available + seats).min(self.economy_seats);
            }
            Some(TravelClass::Business) => {
                self.business_available = (self.business_available + seats).min(self.business_seats);
            }
            Some(TravelClass::First) => {
                self.first_class_available =
                    (self.first_class_available + seats).min(self.first_class_seats);
            }
            None => {}
        }
    }
}
