pub mod booking;
pub mod flight;
pub mod inventory;
pub mod record;
