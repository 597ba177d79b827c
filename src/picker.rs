//! Default file selection for a torrent.
//!
//! The biggest video wins. Without videos, audio is played from the start of
//! its playlist, or from the first audio file when tracks are not numbered.

use mediapick_common::Result;
use tracing::debug;

use crate::classify::{classify, MediaKind};
use crate::config::{PickerConfig, VideoSelection};
use crate::file_ref::FileRef;
use crate::playlist::{get_playlist_track, is_in_playlist};

/// Pick the index of the file to play using default settings.
///
/// Returns `Ok(None)` when nothing is playable.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](mediapick_common::Error::InvalidArgument)
/// if any entry is a record without a `name`.
///
/// # Examples
///
/// ```
/// use mediapick::{pick_file_to_play, FileRef};
///
/// let files = vec![FileRef::sized("sample.mp4", 10), FileRef::sized("movie.mkv", 20)];
/// assert_eq!(pick_file_to_play(&files).unwrap(), Some(1));
/// ```
pub fn pick_file_to_play(files: &[FileRef]) -> Result<Option<usize>> {
    Picker::default().pick(files)
}

/// A configurable default-file picker.
///
/// ```
/// use mediapick::{FileRef, Picker};
/// use mediapick::config::{PickerConfig, VideoSelection};
///
/// let picker = Picker::new(
///     PickerConfig::builder()
///         .video_selection(VideoSelection::First)
///         .build(),
/// );
/// let files = vec![FileRef::sized("a.mp4", 10), FileRef::sized("b.mp4", 20)];
/// assert_eq!(picker.pick(&files).unwrap(), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Picker {
    config: PickerConfig,
}

impl Picker {
    /// Create a new picker with the given configuration.
    pub fn new(config: PickerConfig) -> Self {
        Self { config }
    }

    /// Get the picker configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Pick the index of the file to play, or `None` if nothing is playable.
    pub fn pick(&self, files: &[FileRef]) -> Result<Option<usize>> {
        let mut videos = Vec::new();
        let mut audios = Vec::new();
        for file in files {
            match classify(file)? {
                MediaKind::Video => videos.push(file),
                MediaKind::Audio => audios.push(file),
                MediaKind::Torrent | MediaKind::Other => {}
            }
        }

        if let Some(video) = self.select_video(&videos) {
            let index = index_of(files, video);
            debug!(?index, candidates = videos.len(), "picked video file");
            return Ok(index);
        }

        if let Some(audio) = self.select_audio(&audios) {
            let index = index_of(files, audio);
            debug!(?index, candidates = audios.len(), "picked audio file");
            return Ok(index);
        }

        debug!(files = files.len(), "no playable file");
        Ok(None)
    }

    fn select_video<'a>(&self, videos: &[&'a FileRef]) -> Option<&'a FileRef> {
        match self.config.video_selection {
            VideoSelection::Largest => videos.iter().copied().reduce(|largest, file| {
                if file.length() > largest.length() {
                    file
                } else {
                    largest
                }
            }),
            VideoSelection::First => videos.first().copied(),
        }
    }

    fn select_audio<'a>(&self, audios: &[&'a FileRef]) -> Option<&'a FileRef> {
        let first = *audios.first()?;
        if !is_in_playlist(first) {
            return Some(first);
        }

        let start = self.config.playlist_start_track;
        match get_playlist_track(audios.iter().copied(), start) {
            Some(track) => Some(track),
            None => {
                debug!(start, "playlist has no starting track, using first audio file");
                Some(first)
            }
        }
    }
}

/// Index of the first entry equal to `file`.
fn index_of(files: &[FileRef], file: &FileRef) -> Option<usize> {
    files.iter().position(|candidate| candidate == file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_ref::FileRecord;
    use mediapick_common::Error;

    #[test]
    fn test_largest_video_wins() {
        let files = vec![FileRef::sized("a.mp4", 10), FileRef::sized("b.mp4", 20)];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(1));
    }

    #[test]
    fn test_video_beats_audio_and_other() {
        let files = vec![
            FileRef::sized("01 song.mp3", 1_000_000),
            FileRef::sized("readme.txt", 5_000_000),
            FileRef::sized("clip.webm", 10),
        ];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(2));
    }

    #[test]
    fn test_video_ties_keep_earliest() {
        let files = vec![
            FileRef::named("info.nfo"),
            FileRef::sized("cd1.avi", 700),
            FileRef::sized("cd2.avi", 700),
        ];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(1));

        // Missing sizes count as zero
        let files = vec![FileRef::named("a.mkv"), FileRef::path("b.mkv")];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(0));
    }

    #[test]
    fn test_equal_entries_resolve_to_first_index() {
        let files = vec![
            FileRef::sized("a.mp4", 5),
            FileRef::sized("b.mp4", 50),
            FileRef::sized("b.mp4", 50),
        ];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(1));
    }

    #[test]
    fn test_playlist_starts_at_track_one() {
        let files = vec![
            FileRef::named("cover.jpg"),
            FileRef::named("02 song.mp3"),
            FileRef::named("01 song.mp3"),
            FileRef::named("03 song.mp3"),
        ];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(2));
    }

    #[test]
    fn test_unnumbered_audio_uses_first() {
        let files = vec![FileRef::named("random.mp3")];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(0));

        // Only the first audio file decides whether this is a playlist
        let files = vec![FileRef::named("intro.ogg"), FileRef::named("01 song.ogg")];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(0));
    }

    #[test]
    fn test_playlist_without_start_track_falls_back() {
        let files = vec![FileRef::named("02 song.mp3"), FileRef::named("03 song.mp3")];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(0));
    }

    #[test]
    fn test_path_strings_are_not_playlists() {
        let files = vec![FileRef::path("02 song.mp3"), FileRef::path("01 song.mp3")];
        assert_eq!(pick_file_to_play(&files).unwrap(), Some(0));
    }

    #[test]
    fn test_nothing_playable() {
        assert_eq!(pick_file_to_play(&[FileRef::named("doc.txt")]).unwrap(), None);
        assert_eq!(pick_file_to_play(&[]).unwrap(), None);
        assert_eq!(
            pick_file_to_play(&[FileRef::path("magnet:?xt=urn:btih:abc")]).unwrap(),
            None
        );
    }

    #[test]
    fn test_nameless_record_is_rejected() {
        let files = vec![
            FileRef::sized("movie.mp4", 10),
            FileRef::Record(FileRecord::default()),
        ];
        assert!(matches!(
            pick_file_to_play(&files),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_first_video_selection() {
        let picker = Picker::new(
            PickerConfig::builder()
                .video_selection(VideoSelection::First)
                .build(),
        );
        let files = vec![
            FileRef::named("song.mp3"),
            FileRef::sized("a.mp4", 10),
            FileRef::sized("b.mp4", 20),
        ];
        assert_eq!(picker.pick(&files).unwrap(), Some(1));
    }

    #[test]
    fn test_custom_playlist_start() {
        let picker = Picker::new(PickerConfig::builder().playlist_start_track(0).build());
        let files = vec![FileRef::named("01 song.mp3"), FileRef::named("00 hidden.mp3")];
        assert_eq!(picker.pick(&files).unwrap(), Some(1));
        assert_eq!(picker.config().playlist_start_track, 0);
    }
}
