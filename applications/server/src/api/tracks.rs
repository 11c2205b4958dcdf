/// Track and membership routes
use super::present;
use crate::{
    error::{Result, ServerError},
    flash::{redirect_with, FlashMessage},
    state::AppState,
    views::playlist_href,
};
use axum::{
    extract::{Path, State},
    response::Response,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tubelist_core::{NewTrack, PlaylistStore, TrackAddition, TrackId, TrackMove};

#[derive(Debug, Deserialize)]
pub struct AddTrackForm {
    pub playlist_name: Option<String>,
    pub date: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoveTrackForm {
    pub from_playlist: Option<String>,
    pub to_playlist: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayCountResponse {
    pub success: bool,
}

fn parse_track_id(raw: &str) -> Result<TrackId> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid track id: {raw}")))
}

/// POST /add_track
pub async fn add_track(
    State(app_state): State<AppState>,
    Form(form): Form<AddTrackForm>,
) -> Result<Response> {
    let (Some(playlist), Some(date), Some(artist), Some(title), Some(url)) = (
        present(form.playlist_name),
        present(form.date),
        present(form.artist),
        present(form.title),
        present(form.url),
    ) else {
        return Ok(redirect_with(
            "/",
            FlashMessage::error("All fields are required to add a track"),
        ));
    };

    let track = NewTrack::new(date, artist.clone(), title.clone(), url);
    let message = match app_state.store.add_track_to_playlist(&playlist, track).await? {
        TrackAddition::Added { track_id, created } => {
            tracing::info!(%track_id, %playlist, created, "Track added");
            FlashMessage::success(format!(
                "Track \"{title}\" by {artist} added to playlist \"{playlist}\""
            ))
        }
        TrackAddition::AlreadyPresent { .. } => FlashMessage::error(format!(
            "Track \"{title}\" by {artist} is already in the playlist \"{playlist}\""
        )),
        TrackAddition::PlaylistNotFound => {
            FlashMessage::error(format!("Playlist \"{playlist}\" does not exist"))
        }
    };

    Ok(redirect_with("/", message))
}

/// POST /remove_track/:name/:track_id
pub async fn remove_track(
    Path((name, track_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    let track_id = parse_track_id(&track_id)?;

    let message = if app_state
        .store
        .remove_track_from_playlist(track_id, &name)
        .await?
    {
        tracing::info!(%track_id, playlist = %name, "Track removed");
        FlashMessage::success(format!("Track removed from playlist \"{name}\""))
    } else {
        FlashMessage::error(format!("Track was not in playlist \"{name}\""))
    };

    Ok(redirect_with(&playlist_href(&name), message))
}

/// POST /move_track/:track_id
pub async fn move_track(
    Path(track_id): Path<String>,
    State(app_state): State<AppState>,
    Form(form): Form<MoveTrackForm>,
) -> Result<Response> {
    let track_id = parse_track_id(&track_id)?;

    let (Some(from), Some(to)) = (present(form.from_playlist), present(form.to_playlist)) else {
        return Ok(redirect_with(
            "/",
            FlashMessage::error("Both source and destination playlists are required"),
        ));
    };

    let message = match app_state.store.move_track(track_id, &from, &to).await? {
        TrackMove::Moved => {
            tracing::info!(%track_id, %from, %to, "Track moved");
            FlashMessage::success(format!("Track moved from \"{from}\" to \"{to}\""))
        }
        TrackMove::NotInSource => {
            FlashMessage::error(format!("Track is not in playlist \"{from}\""))
        }
        TrackMove::AlreadyInDestination => {
            FlashMessage::error(format!("Track is already in playlist \"{to}\""))
        }
        TrackMove::PlaylistNotFound => FlashMessage::error(format!(
            "Playlist \"{from}\" or \"{to}\" does not exist"
        )),
        TrackMove::TrackNotFound => {
            FlashMessage::error(format!("Track {track_id} does not exist"))
        }
    };

    Ok(redirect_with(&playlist_href(&from), message))
}

/// POST /increment_play_count/:track_id
pub async fn increment_play_count(
    Path(track_id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<PlayCountResponse>> {
    let track_id = parse_track_id(&track_id)?;
    let success = app_state.store.increment_play_count(track_id).await?;

    if !success {
        tracing::debug!(%track_id, "Play count for unknown track ignored");
    }

    Ok(Json(PlayCountResponse { success }))
}
