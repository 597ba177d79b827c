//! Playlist track numbers read from file names.
//!
//! An album torrent usually names its tracks "01 Intro.mp3", "02 Song.mp3".
//! The leading numeric token of the name is taken as the track number.

use crate::file_ref::FileRef;

/// Read the track number from the first space-delimited token of the name.
///
/// Returns `None` when the file has no `name` (path strings have none) or
/// when the token does not start with a number.
///
/// # Examples
///
/// ```
/// use mediapick::{get_track_number, FileRef};
///
/// assert_eq!(get_track_number(&FileRef::named("03 Track.mp3")), Some(3));
/// assert_eq!(get_track_number(&FileRef::named("Track.mp3")), None);
/// ```
pub fn get_track_number(file: &FileRef) -> Option<i64> {
    let name = file.name()?;
    let token = name.split(' ').next().unwrap_or_default();
    parse_leading_int(token)
}

/// Check whether a file's name carries a track number.
pub fn is_in_playlist(file: &FileRef) -> bool {
    get_track_number(file).is_some()
}

/// Find the first file whose track number equals `number`.
pub fn get_playlist_track<'a, I>(files: I, number: i64) -> Option<&'a FileRef>
where
    I: IntoIterator<Item = &'a FileRef>,
{
    files
        .into_iter()
        .find(|file| get_track_number(file) == Some(number))
}

/// Parse a base-10 integer prefix: leading whitespace, optional sign, digits.
///
/// Trailing garbage is ignored ("7th" is 7). Values outside `i64` are `None`.
fn parse_leading_int(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}
