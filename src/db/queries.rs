use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingFields, Package};

const SELECT_BOOKINGS: &str = "SELECT id, customer_name, phone, booking_date, booking_time, package, notes, created_at FROM bookings";

const ORDER_BY_SCHEDULE: &str = "ORDER BY booking_date ASC, booking_time ASC, id ASC";

// ── Bookings ──

pub fn create_booking(conn: &Connection, fields: &BookingFields) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO bookings (customer_name, phone, booking_date, booking_time, package, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            fields.customer_name,
            fields.phone,
            fields.booking_date,
            fields.booking_time,
            fields.package.as_str(),
            fields.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_booking(conn: &Connection, id: i64, fields: &BookingFields) -> rusqlite::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings SET customer_name = ?1, phone = ?2, booking_date = ?3, booking_time = ?4, package = ?5, notes = ?6
         WHERE id = ?7",
        params![
            fields.customer_name,
            fields.phone,
            fields.booking_date,
            fields.booking_time,
            fields.package.as_str(),
            fields.notes,
            id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_booking(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

pub fn get_booking_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Booking>> {
    let result = conn.query_row(
        &format!("{SELECT_BOOKINGS} WHERE id = ?1"),
        params![id],
        parse_booking_row,
    );

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// All bookings in schedule order. A non-empty `search` keeps rows whose name
/// or phone contains it, ignoring case (Unicode lowercase via `casefold`).
pub fn list_bookings(conn: &Connection, search: Option<&str>) -> rusqlite::Result<Vec<Booking>> {
    match search.filter(|term| !term.is_empty()) {
        Some(term) => {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_BOOKINGS} WHERE instr(casefold(customer_name), casefold(?1)) > 0 \
                 OR instr(casefold(phone), casefold(?1)) > 0 {ORDER_BY_SCHEDULE}"
            ))?;
            let rows = stmt.query_map(params![term], parse_booking_row)?;
            rows.collect()
        }
        None => {
            let mut stmt = conn.prepare(&format!("{SELECT_BOOKINGS} {ORDER_BY_SCHEDULE}"))?;
            let rows = stmt.query_map([], parse_booking_row)?;
            rows.collect()
        }
    }
}

pub fn ping(conn: &Connection) -> rusqlite::Result<()> {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

fn parse_booking_row(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    let package_str: String = row.get(5)?;
    let created_at_str: String = row.get(7)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(Booking {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        phone: row.get(2)?,
        booking_date: row.get(3)?,
        booking_time: row.get(4)?,
        package: Package::parse(&package_str),
        notes: row.get(6)?,
        created_at,
    })
}
