pub mod error;
pub mod models;
pub mod services;

pub use error::BookingError;
pub use models::preset_slots;
pub use services::BookingService;
