//! In-memory player and playlist service for sync tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveTime;
use slotlist_core::{
    Clock, DeviceId, NowPlaying, PlayerService, PlaylistId, PlaylistMeta, PlaylistService,
    Result, SlotlistError, Track, UserId, MINUTES_PER_DAY,
};
use slotlist_schedule::{Schedule, ScheduledPlaylist};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

pub fn track(id: &str) -> Track {
    Track::new(id, format!("spotify:track:{id}"), format!("Song {id}"), 180_000)
}

pub fn tracks(ids: &[&str]) -> Vec<Track> {
    ids.iter().map(|id| track(id)).collect()
}

/// Build a playlist from a schedule token and track ids
pub fn scheduled(token: &str, ids: &[&str]) -> ScheduledPlaylist {
    let schedule = Schedule::parse(token).expect("valid token");
    ScheduledPlaylist::from_schedule(
        PlaylistId::new("pl-1"),
        "Test playlist",
        &schedule,
        tracks(ids).into_iter().map(Arc::new).collect(),
    )
}

fn track_from_uri(uri: &str) -> Track {
    track(uri.rsplit(':').next().unwrap_or(uri))
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCall {
    CurrentlyPlaying,
    Queue,
    Enqueue(String),
    SkipNext,
}

#[derive(Default)]
struct PlayerState {
    playing: Option<Track>,
    queue: VecDeque<Track>,
    calls: Vec<PlayerCall>,
    fail_queue: bool,
}

/// Player whose queue is a plain list; skipping plays the queue head
#[derive(Default)]
pub struct FakePlayer {
    state: Mutex<PlayerState>,
}

impl FakePlayer {
    pub fn playing(current: &str, queue: &[&str]) -> Arc<Self> {
        let player = Self::default();
        {
            let mut state = player.state.lock().unwrap();
            state.playing = Some(track(current));
            state.queue = tracks(queue).into();
        }
        Arc::new(player)
    }

    pub fn idle() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_queue(&self) {
        self.state.lock().unwrap().fail_queue = true;
    }

    pub fn calls(&self) -> Vec<PlayerCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn skips(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == PlayerCall::SkipNext)
            .count()
    }

    pub fn enqueued(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlayerCall::Enqueue(uri) => Some(uri),
                _ => None,
            })
            .collect()
    }

    pub fn now_playing(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .playing
            .as_ref()
            .map(|t| t.id.as_str().to_string())
    }
}

#[async_trait]
impl PlayerService for FakePlayer {
    async fn currently_playing(&self) -> Result<Option<NowPlaying>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(PlayerCall::CurrentlyPlaying);
        Ok(state.playing.clone().map(|track| NowPlaying {
            track,
            is_playing: true,
            device_id: Some(DeviceId::new("device-1")),
        }))
    }

    async fn queue(&self) -> Result<Vec<Track>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(PlayerCall::Queue);
        if state.fail_queue {
            return Err(SlotlistError::network("queue unavailable"));
        }
        Ok(state.queue.iter().cloned().collect())
    }

    async fn enqueue(&self, uri: &str, _device: Option<&DeviceId>) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(PlayerCall::Enqueue(uri.to_string()));
        state.queue.push_back(track_from_uri(uri));
        Ok(())
    }

    async fn skip_next(&self, _device: Option<&DeviceId>) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(PlayerCall::SkipNext);
        state.playing = state.queue.pop_front();
        Ok(())
    }
}

// ============================================================================
// Playlist service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Meta,
    Tracks,
    ReplaceDescription(String),
    Reorder {
        range_start: usize,
        range_length: usize,
        insert_before: usize,
    },
    Remove {
        uri: String,
        position: usize,
    },
    CurrentUser,
}

struct ServiceState {
    meta: PlaylistMeta,
    tracks: Vec<Track>,
    user: UserId,
    calls: Vec<ServiceCall>,
    fail_description: bool,
}

/// Single-playlist service applying writes to its own copy
pub struct FakePlaylistService {
    state: Mutex<ServiceState>,
}

impl FakePlaylistService {
    pub fn new(description: &str, ids: &[&str], owner: &str, user: &str) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ServiceState {
                meta: PlaylistMeta {
                    id: PlaylistId::new("pl-1"),
                    title: "Test playlist".to_string(),
                    description: description.to_string(),
                    owner_id: UserId::new(owner),
                },
                tracks: tracks(ids),
                user: UserId::new(user),
                calls: Vec::new(),
                fail_description: false,
            }),
        })
    }

    pub fn fail_description_writes(&self) {
        self.state.lock().unwrap().fail_description = true;
    }

    pub fn description(&self) -> String {
        self.state.lock().unwrap().meta.description.clone()
    }

    pub fn track_ids(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .tracks
            .iter()
            .map(|t| t.id.as_str().to_string())
            .collect()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn writes(&self) -> Vec<ServiceCall> {
        self.calls()
            .into_iter()
            .filter(|call| {
                !matches!(
                    call,
                    ServiceCall::Meta | ServiceCall::Tracks | ServiceCall::CurrentUser
                )
            })
            .collect()
    }
}

#[async_trait]
impl PlaylistService for FakePlaylistService {
    async fn playlist_meta(&self, id: &PlaylistId) -> Result<PlaylistMeta> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ServiceCall::Meta);
        if &state.meta.id != id {
            return Err(SlotlistError::PlaylistNotFound(id.clone()));
        }
        Ok(state.meta.clone())
    }

    async fn all_tracks(&self, _id: &PlaylistId) -> Result<Vec<Track>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ServiceCall::Tracks);
        Ok(state.tracks.clone())
    }

    async fn replace_description(&self, _id: &PlaylistId, description: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(ServiceCall::ReplaceDescription(description.to_string()));
        if state.fail_description {
            return Err(SlotlistError::Service {
                status: 500,
                message: "description update failed".to_string(),
            });
        }
        state.meta.description = description.to_string();
        Ok(())
    }

    async fn reorder_tracks(
        &self,
        _id: &PlaylistId,
        range_start: usize,
        range_length: usize,
        insert_before: usize,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ServiceCall::Reorder {
            range_start,
            range_length,
            insert_before,
        });

        let moved: Vec<Track> = state
            .tracks
            .drain(range_start..range_start + range_length)
            .collect();
        let target = if insert_before > range_start {
            insert_before - range_length
        } else {
            insert_before
        };
        for (offset, track) in moved.into_iter().enumerate() {
            state.tracks.insert(target + offset, track);
        }
        Ok(())
    }

    async fn remove_track(&self, _id: &PlaylistId, uri: &str, position: usize) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ServiceCall::Remove {
            uri: uri.to_string(),
            position,
        });
        if state.tracks.get(position).map(|t| t.uri.as_str()) != Some(uri) {
            return Err(SlotlistError::invalid_input("no such track at position"));
        }
        state.tracks.remove(position);
        Ok(())
    }

    async fn current_user_id(&self) -> Result<UserId> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ServiceCall::CurrentUser);
        Ok(state.user.clone())
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Clock whose minute of day can be changed between ticks
#[derive(Debug, Default)]
pub struct TestClock {
    minute: AtomicU32,
}

impl TestClock {
    pub fn at(hour: u32, minute: u32) -> Arc<Self> {
        let clock = Self::default();
        clock.set(hour, minute);
        Arc::new(clock)
    }

    pub fn set(&self, hour: u32, minute: u32) {
        self.minute
            .store((hour * 60 + minute) % MINUTES_PER_DAY, Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now(&self) -> NaiveTime {
        let minute = self.minute.load(Ordering::SeqCst);
        NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
    }
}
