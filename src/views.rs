//! HTML pages for the admin interface. Rendering only; no storage access.

use askama::Template;

use crate::models::{Booking, BookingFields, Package};

/// Maps a `success` redirect code to its banner text.
pub fn flash_message(code: Option<&str>) -> Option<&'static str> {
    match code? {
        "created" => Some("Booking created"),
        "updated" => Some("Booking updated"),
        "deleted" => Some("Booking deleted"),
        _ => None,
    }
}

#[derive(Template)]
#[template(path = "list.html")]
struct ListPage<'a> {
    flash: Option<&'a str>,
    search: &'a str,
    timezone: &'a str,
    bookings: &'a [Booking],
}

struct PackageOption {
    name: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "form.html")]
struct FormPage<'a> {
    flash: Option<&'a str>,
    heading: &'a str,
    action: &'a str,
    booking_id: Option<i64>,
    submit_name: &'a str,
    submit_label: &'a str,
    values: &'a BookingFields,
    packages: Vec<PackageOption>,
    errors: &'a [String],
}

#[derive(Template)]
#[template(path = "message.html")]
struct MessagePage<'a> {
    flash: Option<&'a str>,
    message: &'a str,
}

fn package_options(current: Package) -> Vec<PackageOption> {
    Package::ALL
        .iter()
        .map(|p| PackageOption {
            name: p.as_str(),
            selected: *p == current,
        })
        .collect()
}

pub fn render_list(
    flash: Option<&str>,
    search: &str,
    timezone: &str,
    bookings: &[Booking],
) -> askama::Result<String> {
    ListPage {
        flash,
        search,
        timezone,
        bookings,
    }
    .render()
}

/// Blank when `values` is default; repopulated after a rejected submission.
pub fn render_create_form(
    flash: Option<&str>,
    values: &BookingFields,
    errors: &[String],
) -> askama::Result<String> {
    FormPage {
        flash,
        heading: "Create Booking",
        action: "create",
        booking_id: None,
        submit_name: "create_booking",
        submit_label: "Save booking",
        values,
        packages: package_options(values.package),
        errors,
    }
    .render()
}

pub fn render_edit_form(
    flash: Option<&str>,
    id: i64,
    values: &BookingFields,
    errors: &[String],
) -> askama::Result<String> {
    FormPage {
        flash,
        heading: "Edit Booking",
        action: "edit",
        booking_id: Some(id),
        submit_name: "update_booking",
        submit_label: "Update",
        values,
        packages: package_options(values.package),
        errors,
    }
    .render()
}

pub fn render_message(flash: Option<&str>, message: &str) -> askama::Result<String> {
    MessagePage { flash, message }.render()
}
