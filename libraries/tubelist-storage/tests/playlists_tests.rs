//! Integration tests for the playlists vertical slice
//!
//! Tests playlist operations including:
//! - Creation with unique titles
//! - Removal refused while tracks remain
//! - Track deduplication by artist and title
//! - Membership uniqueness
//! - Moving tracks without losing the source membership


use test_helpers::*;
use tubelist_core::{
    NewTrack, PlaylistRemoval, PlaylistStore, SortDirection, SortField, TrackAddition, TrackId,
    TrackMove, TrackQuery,
};

#[tokio::test]
async fn test_create_playlist_rejects_duplicate_title() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    assert!(store.create_playlist("Favorites").await.unwrap());
    assert!(!store.create_playlist("Favorites").await.unwrap());

    // Titles are compared exactly
    assert!(store.create_playlist("favorites").await.unwrap());

    let titles = store.list_playlists().await.unwrap();
    assert_eq!(titles, vec!["Favorites".to_string(), "favorites".to_string()]);
}

#[tokio::test]
async fn test_list_playlists_in_creation_order() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    for title in ["Zeta", "Alpha", "Mid"] {
        store.create_playlist(title).await.unwrap();
    }

    assert_eq!(
        store.list_playlists().await.unwrap(),
        vec!["Zeta", "Alpha", "Mid"]
    );
    assert!(store.playlist_exists("Alpha").await.unwrap());
    assert!(!store.playlist_exists("Omega").await.unwrap());
}

#[tokio::test]
async fn test_add_track_deduplicates_by_artist_and_title() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    store.create_playlist("One").await.unwrap();
    store.create_playlist("Two").await.unwrap();

    let first = store
        .add_track_to_playlist("One", NewTrack::new("2024-01-01", "A", "T", "u1"))
        .await
        .unwrap();
    let second = store
        .add_track_to_playlist("Two", NewTrack::new("1999-12-31", "A", "T", "u2"))
        .await
        .unwrap();

    let TrackAddition::Added { track_id, created: true } = first else {
        panic!("expected a newly created track, got {first:?}");
    };
    assert_eq!(
        second,
        TrackAddition::Added {
            track_id,
            created: false
        }
    );

    assert_eq!(store.track_count().await.unwrap(), 1);

    let stored = store.get_track(track_id).await.unwrap().unwrap();
    assert_eq!(stored.url, "u1");
    assert_eq!(stored.date, "2024-01-01");
    assert_eq!(stored.play_count, 0);
}

#[tokio::test]
async fn test_add_existing_member_is_reported_not_duplicated() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "Mix", vec![new_track("A", "T")]).await;

    let again = store
        .add_track_to_playlist("Mix", new_track("A", "T"))
        .await
        .unwrap();

    assert_eq!(again, TrackAddition::AlreadyPresent { track_id: ids[0] });
    assert!(!again.is_success());
    assert_eq!(membership_rows(test_db.pool(), "Mix", ids[0]).await, 1);
}

#[tokio::test]
async fn test_add_track_to_missing_playlist_creates_nothing() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let outcome = store
        .add_track_to_playlist("Nowhere", new_track("A", "T"))
        .await
        .unwrap();

    assert_eq!(outcome, TrackAddition::PlaylistNotFound);
    assert_eq!(store.track_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_remove_playlist_only_when_empty() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "Full", vec![new_track("A", "T1"), new_track("A", "T2")]).await;

    assert_eq!(
        store.remove_playlist("Full").await.unwrap(),
        PlaylistRemoval::NotEmpty { tracks: 2 }
    );
    assert!(store.playlist_exists("Full").await.unwrap());

    for id in &ids {
        assert!(store.remove_track_from_playlist(*id, "Full").await.unwrap());
    }

    assert_eq!(store.remove_playlist("Full").await.unwrap(), PlaylistRemoval::Removed);
    assert!(!store.playlist_exists("Full").await.unwrap());

    // Tracks outlive the playlist
    assert_eq!(store.track_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_remove_missing_playlist() {
    let test_db = TestDb::new().await;

    assert_eq!(
        test_db.store().remove_playlist("Ghost").await.unwrap(),
        PlaylistRemoval::NotFound
    );
}

#[tokio::test]
async fn test_remove_track_is_idempotent() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "Mix", vec![new_track("A", "T")]).await;

    assert!(store.remove_track_from_playlist(ids[0], "Mix").await.unwrap());
    assert!(!store.remove_track_from_playlist(ids[0], "Mix").await.unwrap());
    assert!(!store
        .remove_track_from_playlist(TrackId::new(999), "Mix")
        .await
        .unwrap());
    assert!(!store.remove_track_from_playlist(ids[0], "Ghost").await.unwrap());
}

#[tokio::test]
async fn test_move_track_between_playlists() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "From", vec![new_track("A", "T")]).await;
    store.create_playlist("To").await.unwrap();

    assert_eq!(
        store.move_track(ids[0], "From", "To").await.unwrap(),
        TrackMove::Moved
    );

    assert_eq!(membership_rows(test_db.pool(), "From", ids[0]).await, 0);
    assert_eq!(membership_rows(test_db.pool(), "To", ids[0]).await, 1);
}

#[tokio::test]
async fn test_move_into_playlist_already_holding_track_keeps_source() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "From", vec![new_track("A", "T")]).await;
    create_playlist_with(store, "To", vec![new_track("A", "T")]).await;

    let outcome = store.move_track(ids[0], "From", "To").await.unwrap();

    assert_eq!(outcome, TrackMove::AlreadyInDestination);
    assert!(!outcome.is_success());
    assert_eq!(membership_rows(test_db.pool(), "From", ids[0]).await, 1);
    assert_eq!(membership_rows(test_db.pool(), "To", ids[0]).await, 1);
}

#[tokio::test]
async fn test_move_track_not_in_source_changes_nothing() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "Other", vec![new_track("A", "T")]).await;
    store.create_playlist("From").await.unwrap();
    store.create_playlist("To").await.unwrap();

    let outcome = store.move_track(ids[0], "From", "To").await.unwrap();

    assert_eq!(outcome, TrackMove::NotInSource);
    assert_eq!(membership_rows(test_db.pool(), "From", ids[0]).await, 0);
    assert_eq!(membership_rows(test_db.pool(), "To", ids[0]).await, 0);
    assert_eq!(membership_rows(test_db.pool(), "Other", ids[0]).await, 1);
}

#[tokio::test]
async fn test_move_with_missing_playlist_or_track() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let ids = create_playlist_with(store, "From", vec![new_track("A", "T")]).await;

    assert_eq!(
        store.move_track(ids[0], "From", "Ghost").await.unwrap(),
        TrackMove::PlaylistNotFound
    );
    assert_eq!(membership_rows(test_db.pool(), "From", ids[0]).await, 1);

    store.create_playlist("To").await.unwrap();
    assert_eq!(
        store.move_track(TrackId::new(404), "From", "To").await.unwrap(),
        TrackMove::TrackNotFound
    );
}

#[tokio::test]
async fn test_read_playlist_search_and_sort() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    store.create_playlist("Mix").await.unwrap();
    for (date, artist, title) in [
        ("2021-05-01", "Boards of Canada", "Roygbiv"),
        ("2019-01-01", "aphex twin", "Xtal"),
        ("2023-03-03", "Autechre", "Bike"),
    ] {
        store
            .add_track_to_playlist("Mix", NewTrack::new(date, artist, title, "u"))
            .await
            .unwrap();
    }

    let by_date = store.read_playlist("Mix", &TrackQuery::default()).await.unwrap();
    let titles: Vec<_> = by_date.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Xtal", "Roygbiv", "Bike"]);

    let by_artist_desc = store
        .read_playlist(
            "Mix",
            &TrackQuery {
                search: None,
                sort: SortField::Artist,
                direction: SortDirection::Desc,
            },
        )
        .await
        .unwrap();
    let artists: Vec<_> = by_artist_desc.iter().map(|t| t.artist.as_str()).collect();
    assert_eq!(artists, vec!["Boards of Canada", "Autechre", "aphex twin"]);

    // Case-insensitive match on artist or title
    let search = TrackQuery::from_params(Some("APHEX"), None, None);
    let found = store.read_playlist("Mix", &search).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Xtal");

    let search = TrackQuery::from_params(Some("bi"), Some("title"), Some("asc"));
    let found = store.read_playlist("Mix", &search).await.unwrap();
    let titles: Vec<_> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Bike", "Roygbiv"]);
}

#[tokio::test]
async fn test_read_playlist_wildcards_are_literal() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    create_playlist_with(
        store,
        "Mix",
        vec![new_track("A", "100% Pure"), new_track("B", "Plain")],
    )
    .await;

    let found = store
        .read_playlist("Mix", &TrackQuery::from_params(Some("%"), None, None))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "100% Pure");
}

#[tokio::test]
async fn test_read_missing_playlist_is_empty() {
    let test_db = TestDb::new().await;

    let tracks = test_db
        .store()
        .read_playlist("Ghost", &TrackQuery::default())
        .await
        .unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_favorites_scenario() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    assert!(store.create_playlist("Favorites").await.unwrap());
    assert!(!store.create_playlist("Favorites").await.unwrap());

    let added = store
        .add_track_to_playlist("Favorites", NewTrack::new("2024-01-01", "A", "T", "u1"))
        .await
        .unwrap();
    assert!(added.is_success());
    let track_id = added.track_id().unwrap();

    let again = store
        .add_track_to_playlist("Favorites", NewTrack::new("2024-01-01", "A", "T", "u2"))
        .await
        .unwrap();
    assert!(!again.is_success());
    assert_eq!(store.get_track(track_id).await.unwrap().unwrap().url, "u1");

    assert!(!store.remove_playlist("Favorites").await.unwrap().is_success());

    store
        .remove_track_from_playlist(track_id, "Favorites")
        .await
        .unwrap();

    assert!(store.remove_playlist("Favorites").await.unwrap().is_success());
}
