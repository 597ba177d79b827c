//! Mediapick-Common: Shared error type and extension tables.
//!
//! This crate provides common functionality used across mediapick:
//!
//! - **Extension Tables**: The fixed video, audio and torrent extension sets
//! - **Path Utilities**: Extension derivation and membership checks on path strings
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use mediapick_common::{Error, Result};
//! use mediapick_common::paths::{file_extension, is_video_path};
//!
//! assert_eq!(file_extension("Movie.MKV"), ".mkv");
//! assert!(is_video_path("/downloads/movie.mp4"));
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_argument("file record has no name"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
