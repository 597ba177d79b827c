//! File references and torrent summaries as handed over by the caller.
//!
//! A torrent-metadata reader reports files either as bare path strings or as
//! records carrying a `name` and a byte `length`. [`FileRef`] keeps both
//! shapes, and extension derivation dispatches on the variant.

use mediapick_common::paths::file_extension;
use mediapick_common::{Error, Result};

/// A file identified by a path string or by a record with a name.
///
/// With the `serde` feature a JSON string deserializes to [`FileRef::Path`]
/// and a JSON object to [`FileRef::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FileRef {
    /// A plain path or magnet string.
    Path(String),
    /// A file record, e.g. one entry of a torrent's file list.
    Record(FileRecord),
}

/// A file record as reported by a torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileRecord {
    /// File name; may include a playlist track number prefix ("03 Song.mp3").
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    /// Size in bytes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub length: Option<u64>,

    /// Path of the file inside the torrent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub path: Option<String>,
}

impl FileRecord {
    /// Create a record with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the size in bytes.
    #[must_use]
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the path inside the torrent.
    #[must_use]
    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl FileRef {
    /// Create a reference from a path string.
    pub fn path<S: Into<String>>(path: S) -> Self {
        Self::Path(path.into())
    }

    /// Create a record reference with only a name.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::Record(FileRecord::new(name))
    }

    /// Create a record reference with a name and a size in bytes.
    pub fn sized<S: Into<String>>(name: S, length: u64) -> Self {
        Self::Record(FileRecord::new(name).with_length(length))
    }

    /// The record's `name`. A path string has no name field.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Record(record) => record.name.as_deref(),
        }
    }

    /// The size used for "largest file" comparison; absent sizes count as 0.
    pub fn length(&self) -> u64 {
        match self {
            Self::Path(_) => 0,
            Self::Record(record) => record.length.unwrap_or(0),
        }
    }

    /// Derive the lowercase extension, including the leading dot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a record without a `name`.
    pub fn extension(&self) -> Result<String> {
        match self {
            Self::Path(path) => Ok(file_extension(path)),
            Self::Record(FileRecord { name: Some(name), .. }) => Ok(file_extension(name)),
            Self::Record(_) => Err(Error::invalid_argument(
                "file record has no name to derive an extension from",
            )),
        }
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<String> for FileRef {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<FileRecord> for FileRef {
    fn from(record: FileRecord) -> Self {
        Self::Record(record)
    }
}

/// Summary of a torrent as kept by the playback application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TorrentSummary {
    /// Display name of the torrent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    /// Hex-encoded info hash.
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "infoHash", skip_serializing_if = "Option::is_none")
    )]
    pub info_hash: Option<String>,

    /// Files of the torrent; absent until metadata has been received.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub files: Option<Vec<FileRef>>,
}

impl TorrentSummary {
    /// Create a summary with a known file list.
    pub fn with_files(files: Vec<FileRef>) -> Self {
        Self {
            files: Some(files),
            ..Self::default()
        }
    }
}
