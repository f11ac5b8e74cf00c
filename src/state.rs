use crate::config::AppConfig;
use crate::db::BookingRepository;

pub struct AppState {
    pub bookings: BookingRepository,
    pub config: AppConfig,
}
