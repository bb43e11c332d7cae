//! Catalog route handlers.
//!
//! Each handler maps one HTTP operation onto one catalog store call.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::catalog::{LaserDisc, NewLaserDisc};
use crate::http::request::request_id_of;
use crate::http::response::{ApiError, MessageBody, DELETED_MESSAGE};
use crate::http::server::AppState;

/// Parse a path segment as a record id.
///
/// Anything that is not an unsigned integer cannot name a record, so it is
/// reported the same way as an unknown id.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.trim().parse::<u64>().map_err(|_| ApiError::NotFound)
}

/// `GET /ld`
pub async fn list_discs(State(state): State<AppState>, headers: HeaderMap) -> Json<Vec<LaserDisc>> {
    let discs = state.store.list_all();
    tracing::debug!(
        request_id = %request_id_of(&headers),
        count = discs.len(),
        "Listing discs"
    );
    Json(discs)
}

/// `GET /ld/{id}`
pub async fn get_disc(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<LaserDisc>, ApiError> {
    let request_id = request_id_of(&headers);
    let id = parse_id(&raw_id).inspect_err(|_| {
        tracing::warn!(request_id = %request_id, id = %raw_id, "Malformed disc id");
    })?;

    match state.store.find_by_id(id) {
        Ok(disc) => {
            tracing::debug!(request_id = %request_id, id, "Disc found");
            Ok(Json(disc))
        }
        Err(_) => {
            tracing::warn!(request_id = %request_id, id, "Disc not found");
            Err(ApiError::NotFound)
        }
    }
}

/// `POST /ld`
pub async fn create_disc(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewLaserDisc>, JsonRejection>,
) -> Result<(StatusCode, Json<LaserDisc>), ApiError> {
    let request_id = request_id_of(&headers);

    let Json(new_disc) = payload.map_err(|rejection| {
        tracing::error!(
            request_id = %request_id,
            error = %rejection.body_text(),
            "Rejected create payload"
        );
        ApiError::Create(rejection.body_text())
    })?;

    let created = state.store.insert(new_disc).map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Failed to store disc");
        ApiError::from_create(e)
    })?;

    tracing::info!(
        request_id = %request_id,
        id = created.id,
        film = %created.film_name,
        "Disc created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /ld/{id}`
pub async fn delete_disc(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<MessageBody>, ApiError> {
    let request_id = request_id_of(&headers);
    let id = parse_id(&raw_id).inspect_err(|_| {
        tracing::warn!(request_id = %request_id, id = %raw_id, "Malformed disc id");
    })?;

    let removed = state.store.delete_by_id(id).map_err(|e| {
        let err = ApiError::from_delete(e);
        match &err {
            ApiError::NotFound => tracing::warn!(request_id = %request_id, id, "Disc not found"),
            other => tracing::error!(request_id = %request_id, id, error = %other, "Failed to delete disc"),
        }
        err
    })?;

    tracing::info!(
        request_id = %request_id,
        id = removed.id,
        film = %removed.film_name,
        "Disc deleted"
    );
    Ok(Json(MessageBody::new(DELETED_MESSAGE)))
}
