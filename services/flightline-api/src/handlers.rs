use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use flightline_core::{FlightRecord, FlightStatus};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PositionParams {
    pub position: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReorderParams {
    pub from: i64,
    pub to: i64,
}

/// POST /flights
///
/// Persists the flight, then places it in the sequence. The placement
/// policy lives here, not in the container: emergencies jump to the front,
/// everything else boards at the back.
pub async fn add_flight(
    State(state): State<Arc<AppState>>,
    Json(record): Json<FlightRecord>,
) -> Result<Json<Value>, ApiError> {
    let request_id = Uuid::new_v4();

    state.store().insert(&record)?;

    let mut sequence = state.sequence();
    if record.status == FlightStatus::Emergency {
        sequence.push_front(record.clone());
    } else {
        sequence.push_back(record.clone());
    }

    info!(
        request_id = %request_id,
        code = %record.code,
        status = ?record.status,
        "Flight added"
    );

    Ok(Json(json!({ "message": "Flight added successfully." })))
}

/// GET /flights/total
pub async fn total_flights(State(state): State<Arc<AppState>>) -> Json<Value> {
    let total = state.sequence().len();
    Json(json!({ "total_flights": total }))
}

/// GET /flights/next
pub async fn next_flight(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FlightRecord>, ApiError> {
    state
        .sequence()
        .first()
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No flights in sequence.".to_string()))
}

/// GET /flights/last
pub async fn last_flight(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FlightRecord>, ApiError> {
    state
        .sequence()
        .last()
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No flights in sequence.".to_string()))
}

/// GET /flights
pub async fn list_flights(State(state): State<Arc<AppState>>) -> Json<Vec<FlightRecord>> {
    Json(state.sequence().to_vec())
}

/// POST /flights/insert?position=
///
/// Positional insert; out-of-range positions clamp to the nearest
/// boundary, so this never rejects.
pub async fn insert_flight(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PositionParams>,
    Json(record): Json<FlightRecord>,
) -> Result<Json<Value>, ApiError> {
    state.store().insert(&record)?;

    state.sequence().insert_at(record.clone(), params.position);

    info!(code = %record.code, position = params.position, "Flight inserted at position");

    Ok(Json(json!({
        "message": format!("Flight inserted at position {}.", params.position)
    })))
}

/// DELETE /flights/extract?position=
///
/// Extraction rejects out-of-range positions. On success the stored rows
/// for the extracted code are deleted as a separate, non-atomic step.
pub async fn extract_flight(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PositionParams>,
) -> Result<Json<Value>, ApiError> {
    let extracted = state.sequence().extract_at(params.position);

    match extracted {
        Some(record) => {
            state.store().delete(&record.code)?;

            info!(code = %record.code, position = params.position, "Flight extracted");

            Ok(Json(json!({
                "message": format!("Flight {} removed successfully.", record.code)
            })))
        }
        None => Err(ApiError::NotFound(
            "Invalid position or empty sequence.".to_string(),
        )),
    }
}

/// PATCH /flights/reorder?from=&to=
///
/// In-memory reorder only; the store keeps no ordering, so no row is
/// touched. The destination index applies after removal.
pub async fn reorder_flights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReorderParams>,
) -> Result<Json<Value>, ApiError> {
    let moved = state.sequence().reorder(params.from, params.to);

    if !moved {
        return Err(ApiError::NotFound("Invalid source position.".to_string()));
    }

    info!(from = params.from, to = params.to, "Flight reordered");

    Ok(Json(json!({
        "message": format!("Flight moved from {} to {}.", params.from, params.to)
    })))
}
