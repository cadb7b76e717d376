//! Squirrel collection and record handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::logging::debug;
use crate::squirrel::{Squirrel, SquirrelForm};

use super::super::{error::ApiError, state::AppState};

/// List every squirrel in stored order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Squirrel>>, ApiError> {
    Ok(Json(state.repository().get_all()?))
}

/// Get one squirrel by id.
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Squirrel>, ApiError> {
    let id = parse_id(&raw_id).ok_or_else(|| not_a_record(&raw_id))?;
    state
        .repository()
        .get_by_id(id)?
        .map(Json)
        .ok_or_else(|| ApiError::squirrel_not_found(id))
}

/// Create a squirrel from a form body.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let form = decode_form(&body);
    let squirrel = state.repository().create(form.name, form.size)?;
    debug!(id = squirrel.id, "created squirrel via API");

    let location = format!("/squirrels/{}", squirrel.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(squirrel),
    )
        .into_response())
}

/// Replace name and size of an existing squirrel.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id).ok_or_else(|| not_a_record(&raw_id))?;
    let form = decode_form(&body);

    if state.repository().update_by_id(id, form.name, form.size)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::squirrel_not_found(id))
    }
}

/// Delete a squirrel.
pub async fn remove(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id).ok_or_else(|| not_a_record(&raw_id))?;

    if state.repository().delete_by_id(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::squirrel_not_found(id))
    }
}

/// Parse a record id: ASCII digits only, fits in `u64`, greater than zero.
fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

/// Read `name` and `size` from a urlencoded body whatever its Content-Type.
///
/// An empty or undecodable body yields empty fields.
fn decode_form(body: &[u8]) -> SquirrelForm {
    serde_urlencoded::from_bytes(body).unwrap_or_else(|e| {
        debug!(error = %e, "body is not a urlencoded form, using empty fields");
        SquirrelForm::default()
    })
}

fn not_a_record(raw: &str) -> ApiError {
    debug!(segment = raw, "path segment is not a squirrel id");
    ApiError::new(
        StatusCode::NOT_FOUND,
        "ROUTE_NOT_FOUND",
        format!("'{}' is not a squirrel id", raw),
    )
    .with_details(serde_json::json!({ "path": format!("/squirrels/{}", raw) }))
}
