//! HLS playlist construction and serialization
//!
//! Builds M3U8 playlist documents in memory and serializes them to the exact
//! line-oriented text format HLS players consume:
//! - Master playlists with `#EXT-X-STREAM-INF` variant rows
//! - Media playlists with `#EXTINF` segment rows
//! - CODECS attribute derivation from symbolic profile/level/audio names

pub mod config;
pub mod error;
pub mod playlist;
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::PlaylistConfig;
pub use error::{CodecError, Error, PlaylistTypeError, Result};
pub use playlist::{codecs, Playlist};
pub use types::{Entry, PlaylistKind, Resolution, SegmentEntry, StreamEntry, StreamOptions};
