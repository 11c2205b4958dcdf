/// HTTP routing
use crate::{api, error::ServerError, state::AppState};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let static_dir = ServeDir::new(&app_state.views.static_dir);

    Router::new()
        // Pages
        .route("/", get(api::pages::index))
        .route("/playlist/:name", get(api::pages::playlist))
        // Playlists
        .route("/create_playlist", post(api::playlists::create_playlist))
        .route("/remove_playlist/:name", post(api::playlists::remove_playlist))
        // Tracks
        .route("/add_track", post(api::tracks::add_track))
        .route(
            "/remove_track/:name/:track_id",
            post(api::tracks::remove_track),
        )
        .route("/move_track/:track_id", post(api::tracks::move_track))
        .route(
            "/increment_play_count/:track_id",
            post(api::tracks::increment_play_count),
        )
        .route("/health", get(api::health::health))
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()),
            ),
        )
        .with_state(app_state)
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}
