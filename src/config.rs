//! Picker configuration.

/// How to choose among several video files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VideoSelection {
    /// Pick the video with the greatest size; the earliest one wins ties.
    /// Files without a size count as 0 bytes.
    #[default]
    Largest,
    /// Pick the first video in list order.
    First,
}

/// Configuration for the [`Picker`](crate::Picker).
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use mediapick::config::{PickerConfig, VideoSelection};
///
/// let config = PickerConfig::builder()
///     .video_selection(VideoSelection::First)
///     .build();
/// assert_eq!(config.playlist_start_track, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Track number to start an audio playlist from.
    /// Default: 1
    pub playlist_start_track: i64,

    /// How to choose among video files.
    /// Default: Largest
    pub video_selection: VideoSelection,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            playlist_start_track: 1,
            video_selection: VideoSelection::default(),
        }
    }
}

impl PickerConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::default()
    }
}

/// Builder for `PickerConfig`.
#[derive(Debug, Clone, Default)]
pub struct PickerConfigBuilder {
    playlist_start_track: Option<i64>,
    video_selection: Option<VideoSelection>,
}

impl PickerConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track number an audio playlist starts from.
    pub fn playlist_start_track(mut self, track: i64) -> Self {
        self.playlist_start_track = Some(track);
        self
    }

    /// Set how to choose among video files.
    pub fn video_selection(mut self, selection: VideoSelection) -> Self {
        self.video_selection = Some(selection);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PickerConfig {
        let defaults = PickerConfig::default();
        PickerConfig {
            playlist_start_track: self
                .playlist_start_track
                .unwrap_or(defaults.playlist_start_track),
            video_selection: self.video_selection.unwrap_or(defaults.video_selection),
        }
    }
}
