pub mod booking;

pub use booking::{Booking, BookingFields, Package};
