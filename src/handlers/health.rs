use std::sync::Arc;

use axum::extract::State;

use crate::errors::AppError;
use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Result<&'static str, AppError> {
    state.bookings.ping()?;
    Ok("ok")
}
