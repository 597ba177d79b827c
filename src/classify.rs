//! Extension-based media classification.
//!
//! Every predicate derives the file extension first, so a record without a
//! `name` fails with [`Error::InvalidArgument`](mediapick_common::Error).
//! Only [`is_torrent`] also looks at the raw string, to recognize magnet links.

use std::fmt;
use std::sync::LazyLock;

use mediapick_common::paths::{is_audio_extension, is_torrent_extension, is_video_extension};
use mediapick_common::Result;
use regex::Regex;

use crate::file_ref::{FileRef, TorrentSummary};

static MAGNET_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(stream-)?magnet:").expect("valid magnet regex"));

/// Coarse media kind of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Video,
    Audio,
    Torrent,
    Other,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Torrent => write!(f, "torrent"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Check whether a file is a playable video.
///
/// # Examples
///
/// ```
/// use mediapick::{is_video, FileRef};
///
/// assert!(is_video(&FileRef::named("Movie.MP4")).unwrap());
/// assert!(!is_video(&FileRef::path("song.mp3")).unwrap());
/// ```
pub fn is_video(file: &FileRef) -> Result<bool> {
    Ok(is_video_extension(&file.extension()?))
}

/// Check whether a file is playable audio.
pub fn is_audio(file: &FileRef) -> Result<bool> {
    Ok(is_audio_extension(&file.extension()?))
}

/// Check whether a file is audio or video we can play.
pub fn is_playable(file: &FileRef) -> Result<bool> {
    Ok(is_video(file)? || is_audio(file)?)
}

/// Check whether a file is a torrent.
///
/// True for a `.torrent` path or record, and for a path string that is a
/// magnet link (`magnet:` or `stream-magnet:`).
///
/// # Examples
///
/// ```
/// use mediapick::{is_torrent, FileRef};
///
/// assert!(is_torrent(&FileRef::path("ubuntu.torrent")).unwrap());
/// assert!(is_torrent(&FileRef::path("magnet:?xt=urn:btih:abc")).unwrap());
/// assert!(!is_torrent(&FileRef::path("movie.mp4")).unwrap());
/// ```
pub fn is_torrent(file: &FileRef) -> Result<bool> {
    if is_torrent_extension(&file.extension()?) {
        return Ok(true);
    }
    Ok(matches!(file, FileRef::Path(path) if MAGNET_LINK.is_match(path)))
}

/// Check whether a torrent summary lists at least one playable file.
///
/// A summary without a file list is not playable.
pub fn is_playable_torrent_summary(summary: &TorrentSummary) -> Result<bool> {
    let Some(files) = &summary.files else {
        return Ok(false);
    };
    for file in files {
        if is_playable(file)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Classify a file into a [`MediaKind`].
///
/// Video takes precedence over audio, and both over torrent.
pub fn classify(file: &FileRef) -> Result<MediaKind> {
    let ext = file.extension()?;
    let kind = if is_video_extension(&ext) {
        MediaKind::Video
    } else if is_audio_extension(&ext) {
        MediaKind::Audio
    } else if is_torrent(file)? {
        MediaKind::Torrent
    } else {
        MediaKind::Other
    };
    tracing::trace!(?file, %kind, "classified file");
    Ok(kind)
}
