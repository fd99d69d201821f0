pub mod db;
pub mod models;
pub mod schema;
pub mod services;
pub mod utils;

pub use models::flight::{Flight, FlightStatus};
pub use models::inventory::{SeatInventory, TravelClass};
pub use utils::error::{AppError, AppResult};
