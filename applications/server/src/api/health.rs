/// Liveness plus a cheap storage round trip
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;
use tubelist_core::PlaylistStore;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub playlists: usize,
    pub tracks: i64,
}

/// GET /health
///
/// Fails with a 500 when the database cannot be queried.
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let playlists = app_state.store.list_playlists().await?.len();
    let tracks = app_state.store.track_count().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        playlists,
        tracks,
    }))
}
