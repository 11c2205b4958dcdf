use crate::tracks;
use sqlx::{SqliteConnection, SqlitePool};
use tubelist_core::{
    error::Result, NewTrack, PlaylistRemoval, Track, TrackAddition, TrackId, TrackMove, TrackQuery,
};

/// Titles of all playlists in insertion order
pub async fn list_titles(pool: &SqlitePool) -> Result<Vec<String>> {
    let titles = sqlx::query_scalar::<_, String>("SELECT title FROM playlists ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(titles)
}

/// Whether a playlist with this exact title exists
pub async fn exists(pool: &SqlitePool, title: &str) -> Result<bool> {
    let mut conn = pool.acquire().await?;
    Ok(find_id(&mut conn, title).await?.is_some())
}

/// Get the rowid of a playlist by title
pub async fn find_id(conn: &mut SqliteConnection, title: &str) -> Result<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM playlists WHERE title = ?")
        .bind(title)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(id)
}

/// Member tracks of a playlist, filtered and ordered by `query`.
///
/// An unknown title yields an empty list.
pub async fn read(pool: &SqlitePool, title: &str, query: &TrackQuery) -> Result<Vec<Track>> {
    let mut sql = String::from(
        r#"
        SELECT t.id, t.date, t.artist, t.title, t.url, t.play_count
        FROM tracks t
        INNER JOIN playlist_tracks pt ON t.id = pt.track_id
        INNER JOIN playlists p ON p.id = pt.playlist_id
        WHERE p.title = ?
        "#,
    );

    let pattern = query.like_pattern();
    if pattern.is_some() {
        sql.push_str(r" AND (t.artist LIKE ? ESCAPE '\' OR t.title LIKE ? ESCAPE '\')");
    }

    // Ties keep insertion order so pages stay stable between requests
    sql.push_str(&format!(
        " ORDER BY {} {}, t.id ASC",
        query.sort.order_expr(),
        query.direction.keyword()
    ));

    let mut q = sqlx::query_as::<_, Track>(&sql).bind(title);
    if let Some(pattern) = pattern {
        q = q.bind(pattern.clone()).bind(pattern);
    }

    let tracks = q.fetch_all(pool).await?;
    Ok(tracks)
}

/// Create a playlist. Returns `false` if the title is already taken.
pub async fn create(pool: &SqlitePool, title: &str) -> Result<bool> {
    let result = sqlx::query("INSERT INTO playlists (title) VALUES (?) ON CONFLICT(title) DO NOTHING")
        .bind(title)
        .execute(pool)
        .await?;

    let created = result.rows_affected() == 1;
    if created {
        tracing::debug!(title, "Created playlist");
    }

    Ok(created)
}

/// Delete an empty playlist
pub async fn remove(pool: &SqlitePool, title: &str) -> Result<PlaylistRemoval> {
    let mut tx = pool.begin().await?;

    let Some(playlist_id) = find_id(&mut tx, title).await? else {
        return Ok(PlaylistRemoval::NotFound);
    };

    let members = member_count(&mut tx, playlist_id).await?;
    if members > 0 {
        return Ok(PlaylistRemoval::NotEmpty { tracks: members });
    }

    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(playlist_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!(title, "Removed playlist");
    Ok(PlaylistRemoval::Removed)
}

/// Add a track to a playlist, creating the track row on first reference
pub async fn add_track(pool: &SqlitePool, title: &str, track: NewTrack) -> Result<TrackAddition> {
    let mut tx = pool.begin().await?;

    // Checked first so a missing playlist leaves no orphan track behind
    let Some(playlist_id) = find_id(&mut tx, title).await? else {
        return Ok(TrackAddition::PlaylistNotFound);
    };

    let (track_id, created) = tracks::insert_or_get(&mut tx, &track).await?;

    let inserted = insert_membership(&mut tx, playlist_id, track_id).await?;

    tx.commit().await?;

    if inserted {
        tracing::debug!(%track_id, playlist = title, created, "Added track to playlist");
        Ok(TrackAddition::Added { track_id, created })
    } else {
        Ok(TrackAddition::AlreadyPresent { track_id })
    }
}

/// Remove a track from a playlist. Removing a non-member is a no-op.
pub async fn remove_track(pool: &SqlitePool, track_id: TrackId, title: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM playlist_tracks
        WHERE track_id = ?
          AND playlist_id = (SELECT id FROM playlists WHERE title = ?)
        "#,
    )
    .bind(track_id)
    .bind(title)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Move a track between playlists.
///
/// Every check happens before the first write: a track missing from the
/// source is not added anywhere, and if the destination already holds the
/// track the source membership is left in place.
pub async fn move_track(
    pool: &SqlitePool,
    track_id: TrackId,
    from: &str,
    to: &str,
) -> Result<TrackMove> {
    let mut tx = pool.begin().await?;

    let from_id = find_id(&mut tx, from).await?;
    let to_id = find_id(&mut tx, to).await?;
    let (Some(from_id), Some(to_id)) = (from_id, to_id) else {
        return Ok(TrackMove::PlaylistNotFound);
    };

    if !tracks::exists(&mut tx, track_id).await? {
        return Ok(TrackMove::TrackNotFound);
    }

    if !is_member(&mut tx, from_id, track_id).await? {
        return Ok(TrackMove::NotInSource);
    }

    if is_member(&mut tx, to_id, track_id).await? {
        return Ok(TrackMove::AlreadyInDestination);
    }

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?")
        .bind(from_id)
        .bind(track_id)
        .execute(&mut *tx)
        .await?;

    insert_membership(&mut tx, to_id, track_id).await?;

    tx.commit().await?;

    tracing::debug!(%track_id, from, to, "Moved track");
    Ok(TrackMove::Moved)
}

// Helper functions

async fn member_count(conn: &mut SqliteConnection, playlist_id: i64) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = ?")
            .bind(playlist_id)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count)
}

async fn is_member(conn: &mut SqliteConnection, playlist_id: i64, track_id: TrackId) -> Result<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT 1 FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?",
    )
    .bind(playlist_id)
    .bind(track_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(found.is_some())
}

async fn insert_membership(
    conn: &mut SqliteConnection,
    playlist_id: i64,
    track_id: TrackId,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO playlist_tracks (playlist_id, track_id)
        VALUES (?, ?)
        ON CONFLICT(playlist_id, track_id) DO NOTHING
        "#,
    )
    .bind(playlist_id)
    .bind(track_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() == 1)
}
