//! PlaylistEditor tests against an in-memory playlist service
//!
//! After every saved edit, reloading the playlist from the service must
//! give back exactly the locally edited playlist.

mod common;

use common::{FakePlaylistService, ServiceCall};
use slotlist_core::PlaylistId;
use slotlist_schedule::{PlaylistEdit, ScheduledPlaylist};
use slotlist_sync::{LoadedPlaylist, PlaylistEditor, SyncError};

const TRACKS: &[&str] = &["t0", "t1", "t2", "t3", "t4", "t5"];

fn id() -> PlaylistId {
    PlaylistId::new("pl-1")
}

async fn load_scheduled(editor: &PlaylistEditor) -> ScheduledPlaylist {
    match editor.load(&id()).await.unwrap() {
        LoadedPlaylist::Scheduled(playlist) => playlist,
        other => panic!("expected scheduled playlist, got {other:?}"),
    }
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn load_partitions_by_description() {
    let service = FakePlaylistService::new("Morning (msv1|60,60|2,1)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service);

    let playlist = load_scheduled(&editor).await;

    assert_eq!(playlist.title(), "Test playlist");
    let counts: Vec<usize> = playlist.slots().iter().map(|s| s.count()).collect();
    assert_eq!(counts, vec![2, 1, 3]);
}

#[tokio::test]
async fn unscheduled_playlist_reports_ownership() {
    let owned = PlaylistEditor::new(FakePlaylistService::new("plain", TRACKS, "me", "me"));
    let foreign = PlaylistEditor::new(FakePlaylistService::new("plain", TRACKS, "them", "me"));

    assert!(matches!(
        owned.load(&id()).await.unwrap(),
        LoadedPlaylist::Unscheduled { can_add: true, .. }
    ));
    assert!(matches!(
        foreign.load(&id()).await.unwrap(),
        LoadedPlaylist::Unscheduled { can_add: false, .. }
    ));
}

#[tokio::test]
async fn load_unknown_playlist_fails() {
    let editor = PlaylistEditor::new(FakePlaylistService::new("plain", TRACKS, "me", "me"));
    let result = editor.load(&PlaylistId::new("missing")).await;
    assert!(matches!(result, Err(SyncError::Service(_))));
}

// ============================================================================
// Init
// ============================================================================

#[tokio::test]
async fn init_appends_default_schedule() {
    let service = FakePlaylistService::new("  Chill vibes ", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());

    let playlist = editor.init_schedule(&id()).await.unwrap();

    assert_eq!(service.description(), "Chill vibes (msv1||)");
    assert_eq!(playlist.slots().len(), 1);
    assert_eq!(playlist.slots()[0].count(), TRACKS.len());
    assert_eq!(load_scheduled(&editor).await, playlist);
}

#[tokio::test]
async fn init_refuses_scheduled_or_foreign_playlists() {
    let scheduled = PlaylistEditor::new(FakePlaylistService::new("(msv1|60|1)", TRACKS, "me", "me"));
    assert!(matches!(
        scheduled.init_schedule(&id()).await,
        Err(SyncError::AlreadyScheduled(_))
    ));

    let service = FakePlaylistService::new("plain", TRACKS, "them", "me");
    let foreign = PlaylistEditor::new(service.clone());
    assert!(matches!(
        foreign.init_schedule(&id()).await,
        Err(SyncError::NotOwner(_))
    ));
    assert!(service.writes().is_empty());
}

// ============================================================================
// Edits
// ============================================================================

#[tokio::test]
async fn schedule_edit_only_rewrites_description() {
    let service = FakePlaylistService::new("Notes (msv1|60,60|2,1)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());
    let playlist = load_scheduled(&editor).await;

    let edited = editor
        .apply(
            &playlist,
            PlaylistEdit::ResizeSlot {
                slot: 0,
                length_minutes: 90,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        service.writes(),
        vec![ServiceCall::ReplaceDescription(
            "Notes (msv1|90,30|2,1)".to_string()
        )]
    );
    assert_eq!(load_scheduled(&editor).await, edited);
}

#[tokio::test]
async fn move_track_reorders_remote_list() {
    let service = FakePlaylistService::new("(msv1|60,60|2,1)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());
    let playlist = load_scheduled(&editor).await;

    let edited = editor
        .apply(
            &playlist,
            PlaylistEdit::MoveTrack {
                from_slot: 2,
                from_index: 1,
                to_slot: 0,
                to_index: 1,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        service.writes(),
        vec![
            ServiceCall::Reorder {
                range_start: 4,
                range_length: 1,
                insert_before: 1
            },
            ServiceCall::ReplaceDescription("(msv1|60,60|3,1)".to_string()),
        ]
    );
    assert_eq!(service.track_ids(), vec!["t0", "t4", "t1", "t2", "t3", "t5"]);
    assert_eq!(load_scheduled(&editor).await, edited);
}

#[tokio::test]
async fn move_track_forward_reorders_remote_list() {
    let service = FakePlaylistService::new("(msv1|60,60|2,1)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());
    let playlist = load_scheduled(&editor).await;

    let edited = editor
        .apply(
            &playlist,
            PlaylistEdit::MoveTrack {
                from_slot: 0,
                from_index: 0,
                to_slot: 2,
                to_index: 3,
            },
        )
        .await
        .unwrap();

    assert_eq!(service.track_ids(), vec!["t1", "t2", "t3", "t4", "t5", "t0"]);
    assert_eq!(load_scheduled(&editor).await, edited);
}

#[tokio::test]
async fn remove_track_deletes_remote_occurrence() {
    let service = FakePlaylistService::new("(msv1|60,60|2,1)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());
    let playlist = load_scheduled(&editor).await;

    let edited = editor
        .apply(&playlist, PlaylistEdit::RemoveTrack { slot: 1, index: 0 })
        .await
        .unwrap();

    assert_eq!(
        service.writes(),
        vec![
            ServiceCall::Remove {
                uri: "spotify:track:t2".to_string(),
                position: 2
            },
            ServiceCall::ReplaceDescription("(msv1|60,60|2,0)".to_string()),
        ]
    );
    assert_eq!(load_scheduled(&editor).await, edited);
}

#[tokio::test]
async fn noop_edit_writes_nothing() {
    let service = FakePlaylistService::new("(msv1|60|2)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());
    let playlist = load_scheduled(&editor).await;

    let same = editor
        .apply(&playlist, PlaylistEdit::RemoveSlot { slot: 9 })
        .await
        .unwrap();

    assert_eq!(same, playlist);
    assert!(service.writes().is_empty());
}

#[tokio::test]
async fn failed_save_keeps_last_good_playlist() {
    let service = FakePlaylistService::new("(msv1|60|2)", TRACKS, "me", "me");
    let editor = PlaylistEditor::new(service.clone());
    let playlist = load_scheduled(&editor).await;
    service.fail_description_writes();

    let result = editor
        .apply(&playlist, PlaylistEdit::SplitSlot { slot: 0 })
        .await;

    assert!(matches!(result, Err(SyncError::Service(_))));
    assert_eq!(service.description(), "(msv1|60|2)");
}
