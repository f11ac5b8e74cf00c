use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub package: Package,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn fields(&self) -> BookingFields {
        BookingFields {
            customer_name: self.customer_name.clone(),
            phone: self.phone.clone(),
            booking_date: self.booking_date.clone(),
            booking_time: self.booking_time.clone(),
            package: self.package,
            notes: self.notes.clone(),
        }
    }
}

/// The mutable part of a booking, as submitted by the admin forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFields {
    pub customer_name: String,
    pub phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub package: Package,
    pub notes: String,
}

impl BookingFields {
    /// Checks required fields and date/time formats. Returns one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = vec![];

        if self.customer_name.is_empty() {
            errors.push("Name is required".to_string());
        }
        if self.phone.is_empty() {
            errors.push("Phone is required".to_string());
        }

        if self.booking_date.is_empty() {
            errors.push("Date is required".to_string());
        } else if NaiveDate::parse_from_str(&self.booking_date, "%Y-%m-%d").is_err() {
            errors.push(format!("Date must look like YYYY-MM-DD, got {}", self.booking_date));
        }

        if self.booking_time.is_empty() {
            errors.push("Time is required".to_string());
        } else if NaiveTime::parse_from_str(&self.booking_time, "%H:%M").is_err()
            && NaiveTime::parse_from_str(&self.booking_time, "%H:%M:%S").is_err()
        {
            errors.push(format!("Time must look like HH:MM, got {}", self.booking_time));
        }

        errors
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Package {
    #[default]
    Basic,
    Standard,
    Premium,
}

impl Package {
    pub const ALL: [Package; 3] = [Package::Basic, Package::Standard, Package::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Package::Basic => "Basic",
            Package::Standard => "Standard",
            Package::Premium => "Premium",
        }
    }

    /// Unknown or empty values fall back to `Basic`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Standard" => Package::Standard,
            "Premium" => Package::Premium,
            _ => Package::Basic,
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> BookingFields {
        BookingFields {
            customer_name: "Ani".to_string(),
            phone: "0811".to_string(),
            booking_date: "2024-05-01".to_string(),
            booking_time: "10:00".to_string(),
            package: Package::Standard,
            notes: String::new(),
        }
    }

    #[test]
    fn test_package_parse() {
        assert_eq!(Package::parse("Premium"), Package::Premium);
        assert_eq!(Package::parse(" Standard "), Package::Standard);
        assert_eq!(Package::parse("Deluxe"), Package::Basic);
        assert_eq!(Package::parse(""), Package::Basic);
    }

    #[test]
    fn test_validate_accepts_well_formed_fields() {
        assert!(valid_fields().validate().is_empty());

        let with_seconds = BookingFields {
            booking_time: "10:00:00".to_string(),
            ..valid_fields()
        };
        assert!(with_seconds.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let fields = BookingFields {
            customer_name: String::new(),
            phone: String::new(),
            booking_date: "01/05/2024".to_string(),
            booking_time: String::new(),
            ..valid_fields()
        };

        let errors = fields.validate();
        assert_eq!(errors.len(), 4);
        assert!(errors[2].contains("YYYY-MM-DD"));
        assert_eq!(errors[3], "Time is required");
    }
}
