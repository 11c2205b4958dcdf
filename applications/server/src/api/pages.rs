/// Rendered pages
use crate::{error::Result, flash::Flash, state::AppState, views};
use axum::{
    extract::{Path, Query, State},
    response::{AppendHeaders, Html, IntoResponse},
};
use serde::Deserialize;
use tubelist_core::{pagination::parse_page, paginate, PlaylistStore, TrackQuery};

/// Raw query parameters; parsed leniently so bad values fall back to defaults
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
}

/// GET /
pub async fn index(State(app_state): State<AppState>, flash: Flash) -> Result<impl IntoResponse> {
    let playlists = app_state.store.list_playlists().await?;
    let random_track = app_state.store.random_track().await?;

    let body = views::index::render(&playlists, random_track.as_ref(), &flash.messages);

    Ok((AppendHeaders(flash.clear_header()), Html(body)))
}

/// GET /playlist/:name
pub async fn playlist(
    Path(name): Path<String>,
    Query(params): Query<PlaylistParams>,
    State(app_state): State<AppState>,
    flash: Flash,
) -> Result<impl IntoResponse> {
    let query = TrackQuery::from_params(
        params.search.as_deref(),
        params.sort.as_deref(),
        params.direction.as_deref(),
    );
    let page_number = parse_page(params.page.as_deref());

    let playlists = app_state.store.list_playlists().await?;
    let tracks = app_state.store.read_playlist(&name, &query).await?;

    let page = paginate(tracks, page_number, app_state.page_size());

    tracing::debug!(
        playlist = %name,
        page = page.page,
        total_pages = page.total_pages,
        "Rendering playlist"
    );

    let body = views::playlist::render(&playlists, &name, &query, &page, &flash.messages);

    Ok((AppendHeaders(flash.clear_header()), Html(body)))
}
