/// Playlist routes
use super::present;
use crate::{
    error::Result,
    flash::{redirect_with, FlashMessage},
    state::AppState,
    views::playlist_href,
};
use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use serde::Deserialize;
use tubelist_core::{PlaylistRemoval, PlaylistStore};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistForm {
    pub playlist_name: Option<String>,
}

/// POST /create_playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Form(form): Form<CreatePlaylistForm>,
) -> Result<Response> {
    let Some(name) = present(form.playlist_name) else {
        return Ok(redirect_with(
            "/",
            FlashMessage::error("A playlist name is required"),
        ));
    };

    let message = if app_state.store.create_playlist(&name).await? {
        tracing::info!(playlist = %name, "Playlist created");
        FlashMessage::success(format!("Playlist \"{name}\" created successfully"))
    } else {
        FlashMessage::error(format!("Playlist \"{name}\" already exists"))
    };

    Ok(redirect_with("/", message))
}

/// POST /remove_playlist/:name
pub async fn remove_playlist(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    let response = match app_state.store.remove_playlist(&name).await? {
        PlaylistRemoval::Removed => {
            tracing::info!(playlist = %name, "Playlist removed");
            redirect_with(
                "/",
                FlashMessage::success(format!("Playlist \"{name}\" removed successfully")),
            )
        }
        PlaylistRemoval::NotEmpty { tracks } => redirect_with(
            &playlist_href(&name),
            FlashMessage::error(format!(
                "Cannot remove playlist \"{name}\". It is not empty ({tracks} tracks)."
            )),
        ),
        PlaylistRemoval::NotFound => redirect_with(
            &playlist_href(&name),
            FlashMessage::error(format!("Playlist \"{name}\" does not exist")),
        ),
    };

    Ok(response)
}
