//! Mediapick - default file selection for media torrents
//!
//! This crate classifies files by extension (video, audio, torrent) and picks
//! the file a player should start with:
//!
//! - **Classification**: [`is_video`], [`is_audio`], [`is_playable`],
//!   [`is_torrent`], [`is_playable_torrent_summary`] and [`classify`]
//! - **Playlists**: track numbers read from names like "01 Intro.mp3"
//! - **Selection**: [`pick_file_to_play`], or a configured [`Picker`]
//!
//! # Examples
//!
//! ```
//! use mediapick::{is_playable_torrent_summary, pick_file_to_play, FileRef, TorrentSummary};
//!
//! let summary = TorrentSummary::with_files(vec![
//!     FileRef::named("cover.jpg"),
//!     FileRef::named("02 Second.mp3"),
//!     FileRef::named("01 First.mp3"),
//! ]);
//!
//! assert!(is_playable_torrent_summary(&summary).unwrap());
//!
//! let files = summary.files.as_deref().unwrap_or_default();
//! assert_eq!(pick_file_to_play(files).unwrap(), Some(2));
//! ```

pub mod classify;
pub mod config;
pub mod file_ref;
pub mod picker;
pub mod playlist;

pub use classify::{
    classify, is_audio, is_playable, is_playable_torrent_summary, is_torrent, is_video, MediaKind,
};
pub use config::{PickerConfig, VideoSelection};
pub use file_ref::{FileRecord, FileRef, TorrentSummary};
pub use mediapick_common::{Error, Result};
pub use picker::{pick_file_to_play, Picker};
pub use playlist::{get_playlist_track, get_track_number, is_in_playlist};
