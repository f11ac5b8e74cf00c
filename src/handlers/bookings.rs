use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::db::BookingRepository;
use crate::errors::AppError;
use crate::models::{BookingFields, Package};
use crate::state::AppState;
use crate::views;

const NOT_RECOGNIZED: &str = "Action not recognized.";
const NOT_FOUND: &str = "Booking not found.";

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub action: Option<String>,
    pub id: Option<String>,
    pub q: Option<String>,
    pub success: Option<String>,
}

/// Which view (GET) or mutation (POST) a request targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    List,
    Create,
    Edit(i64),
    Delete,
    Unrecognized,
}

impl Action {
    /// A missing `action` means `list`. `edit` without an `id` is unrecognized.
    pub fn parse(action: Option<&str>, id: Option<&str>) -> Self {
        match (action.unwrap_or("list"), id) {
            ("list", _) => Action::List,
            ("create", _) => Action::Create,
            ("edit", Some(id)) => Action::Edit(parse_id(id)),
            ("delete", _) => Action::Delete,
            _ => Action::Unrecognized,
        }
    }
}

/// Takes the leading digits of `raw`, clamped to `i64::MAX`. No digits is 0,
/// which matches no row.
pub fn parse_id(raw: &str) -> i64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(i64::MAX)
}

/// Body of the create, edit and delete forms. Missing fields are empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub id: Option<String>,
    /// Submit control of the per-row delete form.
    pub delete_booking: Option<String>,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub package: String,
    pub notes: String,
}

impl BookingForm {
    pub fn fields(&self) -> BookingFields {
        BookingFields {
            customer_name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            booking_date: self.date.trim().to_string(),
            booking_time: self.time.trim().to_string(),
            package: Package::parse(&self.package),
            notes: self.notes.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(BookingFields),
    Update { id: i64, fields: BookingFields },
    Delete { id: i64 },
}

impl Mutation {
    /// A body carrying `delete_booking` is a delete whatever the action.
    pub fn from_request(action: Action, form: &BookingForm) -> Option<Self> {
        let body_id = form.id.as_deref().map(parse_id);
        if form.delete_booking.is_some() {
            return Some(Mutation::Delete {
                id: body_id.unwrap_or(0),
            });
        }
        match action {
            Action::Create => Some(Mutation::Create(form.fields())),
            Action::Edit(query_id) => Some(Mutation::Update {
                id: body_id.unwrap_or(query_id),
                fields: form.fields(),
            }),
            Action::Delete => Some(Mutation::Delete {
                id: body_id.unwrap_or(0),
            }),
            Action::List | Action::Unrecognized => None,
        }
    }

    pub fn success_code(&self) -> &'static str {
        match self {
            Mutation::Create(_) => "created",
            Mutation::Update { .. } => "updated",
            Mutation::Delete { .. } => "deleted",
        }
    }

    pub fn apply(&self, bookings: &BookingRepository) -> Result<(), AppError> {
        match self {
            Mutation::Create(fields) => {
                let id = bookings.create(fields)?;
                tracing::info!(id, "booking created");
            }
            Mutation::Update { id, fields } => {
                if bookings.update(*id, fields)? {
                    tracing::info!(id, "booking updated");
                } else {
                    tracing::debug!(id, "update matched no booking");
                }
            }
            Mutation::Delete { id } => {
                if bookings.delete(*id)? {
                    tracing::info!(id, "booking deleted");
                } else {
                    tracing::debug!(id, "delete matched no booking");
                }
            }
        }
        Ok(())
    }
}

// GET /?action=...
pub async fn show_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let flash = views::flash_message(query.success.as_deref());

    let html = match Action::parse(query.action.as_deref(), query.id.as_deref()) {
        Action::List => {
            let search = query.q.as_deref().unwrap_or("");
            let bookings = state.bookings.list(Some(search))?;
            views::render_list(flash, search, &state.config.timezone, &bookings)?
        }
        Action::Create => views::render_create_form(flash, &BookingFields::default(), &[])?,
        Action::Edit(id) => match state.bookings.get_by_id(id)? {
            Some(booking) => views::render_edit_form(flash, booking.id, &booking.fields(), &[])?,
            None => views::render_message(flash, NOT_FOUND)?,
        },
        Action::Delete | Action::Unrecognized => views::render_message(flash, NOT_RECOGNIZED)?,
    };

    Ok(Html(html))
}

// POST /?action=create | edit&id=N | delete, or any path with `delete_booking`
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    Form(form): Form<BookingForm>,
) -> Result<Response, AppError> {
    let action = Action::parse(query.action.as_deref(), query.id.as_deref());

    let Some(mutation) = Mutation::from_request(action, &form) else {
        return Ok(Html(views::render_message(None, NOT_RECOGNIZED)?).into_response());
    };

    if state.config.strict_validation {
        if let Some(rejection) = reject_invalid(&mutation)? {
            return Ok(rejection);
        }
    }

    mutation.apply(&state.bookings)?;

    Ok(Redirect::to(&format!("/?success={}", mutation.success_code())).into_response())
}

/// Re-renders the submitted form when strict validation finds problems.
fn reject_invalid(mutation: &Mutation) -> Result<Option<Response>, AppError> {
    let html = match mutation {
        Mutation::Create(fields) => {
            let errors = fields.validate();
            if errors.is_empty() {
                return Ok(None);
            }
            views::render_create_form(None, fields, &errors)?
        }
        Mutation::Update { id, fields } => {
            let errors = fields.validate();
            if errors.is_empty() {
                return Ok(None);
            }
            views::render_edit_form(None, *id, fields, &errors)?
        }
        Mutation::Delete { .. } => return Ok(None),
    };

    tracing::warn!(kind = mutation.success_code(), "rejected invalid booking form");
    Ok(Some((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()))
}
