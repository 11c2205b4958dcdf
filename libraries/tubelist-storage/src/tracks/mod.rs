use sqlx::{SqliteConnection, SqlitePool};
use tubelist_core::{error::Result, NewTrack, Track, TrackId};

const TRACK_COLUMNS: &str = "id, date, artist, title, url, play_count";

/// Get track by ID
pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let track = sqlx::query_as::<_, Track>(&format!(
        "SELECT {TRACK_COLUMNS} FROM tracks WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(track)
}

/// Pick one track uniformly at random
pub async fn random(pool: &SqlitePool) -> Result<Option<Track>> {
    let track = sqlx::query_as::<_, Track>(&format!(
        "SELECT {TRACK_COLUMNS} FROM tracks ORDER BY RANDOM() LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;

    Ok(track)
}

/// Count all tracks, including orphans
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Find a track by its natural key
pub async fn find_id(
    conn: &mut SqliteConnection,
    artist: &str,
    title: &str,
) -> Result<Option<TrackId>> {
    let id = sqlx::query_scalar::<_, TrackId>(
        "SELECT id FROM tracks WHERE artist = ? AND title = ?",
    )
    .bind(artist)
    .bind(title)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(id)
}

/// Whether a track row exists
pub async fn exists(conn: &mut SqliteConnection, id: TrackId) -> Result<bool> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM tracks WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(found.is_some())
}

/// Insert a track unless one with the same artist and title exists.
///
/// Returns the id of the stored row and whether it was created by this call.
/// An existing row keeps its original date and url.
pub async fn insert_or_get(conn: &mut SqliteConnection, track: &NewTrack) -> Result<(TrackId, bool)> {
    let result = sqlx::query(
        r#"
        INSERT INTO tracks (date, artist, title, url)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(artist, title) DO NOTHING
        "#,
    )
    .bind(&track.date)
    .bind(&track.artist)
    .bind(&track.title)
    .bind(&track.url)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 1 {
        let id = TrackId::new(result.last_insert_rowid());
        tracing::debug!(%id, artist = %track.artist, title = %track.title, "Inserted track");
        return Ok((id, true));
    }

    let id = find_id(conn, &track.artist, &track.title)
        .await?
        .ok_or_else(|| {
            tubelist_core::TubelistError::storage(format!(
                "Track {} - {} vanished after conflicting insert",
                track.artist, track.title
            ))
        })?;

    Ok((id, false))
}

/// Increment the play counter
pub async fn increment_play_count(pool: &SqlitePool, id: TrackId) -> Result<bool> {
    let result = sqlx::query("UPDATE tracks SET play_count = play_count + 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
