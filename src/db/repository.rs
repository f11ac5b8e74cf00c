use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::config::DatabaseConfig;
use crate::db::{self, queries};
use crate::errors::AppError;
use crate::models::{Booking, BookingFields};

/// Booking storage over a single shared SQLite connection.
///
/// Each call holds the connection lock for one statement; there are no
/// explicit transactions, so concurrent updates are last-write-wins.
#[derive(Clone)]
pub struct BookingRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BookingRepository {
    pub fn open(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let conn = db::init_db(&config.path)?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, AppError> {
        self.conn
            .lock()
            .map_err(|_| AppError::Connection("connection lock poisoned".to_string()))
    }

    pub fn create(&self, fields: &BookingFields) -> Result<i64, AppError> {
        let conn = self.conn()?;
        Ok(queries::create_booking(&conn, fields)?)
    }

    /// Returns false when no row has `id`.
    pub fn update(&self, id: i64, fields: &BookingFields) -> Result<bool, AppError> {
        let conn = self.conn()?;
        Ok(queries::update_booking(&conn, id, fields)?)
    }

    /// Returns false when no row has `id`.
    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn()?;
        Ok(queries::delete_booking(&conn, id)?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Booking>, AppError> {
        let conn = self.conn()?;
        Ok(queries::get_booking_by_id(&conn, id)?)
    }

    pub fn list(&self, search: Option<&str>) -> Result<Vec<Booking>, AppError> {
        let conn = self.conn()?;
        Ok(queries::list_bookings(&conn, search)?)
    }

    pub fn ping(&self) -> Result<(), AppError> {
        let conn = self.conn()?;
        Ok(queries::ping(&conn)?)
    }
}
