//! Path utilities for detecting media types by extension.
//!
//! Extensions are compared with their leading dot and in lowercase, so
//! `"Movie.MKV"` and `"movie.mkv"` both derive `".mkv"`.

use std::path::Path;

/// Playable video extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    ".avi", ".m4v", ".mkv", ".mov", ".mp4", ".mpg", ".ogv", ".webm", ".wmv",
];

/// Playable audio extensions.
const AUDIO_EXTENSIONS: &[&str] = &[".aac", ".ac3", ".mp3", ".ogg", ".wav", ".m4a"];

/// Extension of a torrent metadata file.
pub const TORRENT_EXTENSION: &str = ".torrent";

/// Derive the lowercase extension of the final path segment, including the dot.
///
/// Returns an empty string when the segment has no extension. A dot-file such
/// as `.mp4` has no extension, and trailing separators are ignored.
///
/// # Examples
///
/// ```
/// use mediapick_common::paths::file_extension;
///
/// assert_eq!(file_extension("Movie.1080p.MKV"), ".mkv");
/// assert_eq!(file_extension("/path/to/song.mp3"), ".mp3");
/// assert_eq!(file_extension("README"), "");
/// assert_eq!(file_extension(".mp4"), "");
/// ```
pub fn file_extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Check if an already-derived extension is a video extension.
pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&ext)
}

/// Check if an already-derived extension is an audio extension.
pub fn is_audio_extension(ext: &str) -> bool {
    AUDIO_EXTENSIONS.contains(&ext)
}

/// Check if an already-derived extension is the torrent extension.
pub fn is_torrent_extension(ext: &str) -> bool {
    ext == TORRENT_EXTENSION
}

/// Check if a path string has a video file extension.
///
/// # Examples
///
/// ```
/// use mediapick_common::paths::is_video_path;
///
/// assert!(is_video_path("movie.mkv"));
/// assert!(is_video_path("/path/to/video.WEBM"));
/// assert!(!is_video_path("song.mp3"));
/// ```
pub fn is_video_path(path: &str) -> bool {
    is_video_extension(&file_extension(path))
}

/// Check if a path string has an audio file extension.
///
/// # Examples
///
/// ```
/// use mediapick_common::paths::is_audio_path;
///
/// assert!(is_audio_path("01 Intro.mp3"));
/// assert!(!is_audio_path("movie.mkv"));
/// ```
pub fn is_audio_path(path: &str) -> bool {
    is_audio_extension(&file_extension(path))
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Get the list of audio file extensions.
#[must_use]
pub fn audio_extensions() -> &'static [&'static str] {
    AUDIO_EXTENSIONS
}
