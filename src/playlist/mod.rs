//! Playlist model and serialization
//!
//! This module owns the playlist aggregate and its M3U8 rendering:
//! - Master playlist with `#EXT-X-STREAM-INF` variant rows
//! - Media playlist with `#EXTINF` segment rows
//! - CODECS attribute derivation from symbolic descriptors

pub mod codec;
pub mod master;
pub mod media;

pub use codec::codecs;
pub use master::generate_master_playlist;
pub use media::generate_media_playlist;

use std::io::Write;

use crate::config::PlaylistConfig;
use crate::error::{PlaylistTypeError, Result};
use crate::types::{Entry, PlaylistKind, Resolution, SegmentEntry, StreamEntry, StreamOptions};

/// An M3U8 playlist
///
/// Entries are appended through the typed operations below, which refuse to
/// mix variant streams and media segments. The entries vector is public so
/// callers can inspect or splice rows directly; consistency is re-checked
/// at render time, which is the enforcement point of last resort.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Rows in rendering order
    pub entries: Vec<Entry>,

    /// EXT-X-VERSION compatibility version
    pub version: u32,

    /// EXT-X-MEDIA-SEQUENCE number of the first segment
    pub sequence: u64,

    /// EXT-X-ALLOW-CACHE: whether players may cache downloaded segments
    pub cache: bool,

    /// EXT-X-TARGETDURATION upper bound in whole seconds
    pub target: u32,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Playlist {
    /// Create a playlist with default header settings
    pub fn new() -> Self {
        Self::with_config(PlaylistConfig::default())
    }

    /// Create a playlist with the given header settings
    pub fn with_config(config: PlaylistConfig) -> Self {
        Self {
            entries: Vec::new(),
            version: config.version,
            sequence: config.sequence,
            cache: config.cache,
            target: config.target,
        }
    }

    /// Playlist kind, derived from the first entry
    ///
    /// `Unset` only while the playlist is empty. The kind is never stored
    /// separately, so it cannot desynchronize from the entries.
    pub fn kind(&self) -> PlaylistKind {
        self.entries.first().map_or(PlaylistKind::Unset, Entry::kind)
    }

    /// True if this playlist references variant playlists
    pub fn is_master(&self) -> bool {
        self.kind() == PlaylistKind::Master
    }

    /// True if every entry agrees with the first entry's kind
    pub fn is_valid(&self) -> bool {
        let kind = self.kind();
        self.entries.iter().all(|e| e.kind() == kind)
    }

    /// Append a variant stream row
    ///
    /// The CODECS attribute is the explicit `options.codecs` override when
    /// given, otherwise derived from the profile/level/audio descriptors.
    /// RESOLUTION is emitted only when both width and height are present.
    pub fn add_playlist(
        &mut self,
        program_id: impl Into<String>,
        uri: impl Into<String>,
        bandwidth: u64,
        options: StreamOptions,
    ) -> Result<()> {
        if self.kind() == PlaylistKind::Media {
            return Err(PlaylistTypeError::StreamNotAllowed.into());
        }

        let codecs = match options.codecs {
            Some(explicit) => Some(explicit),
            None => {
                let derived = codec::codecs(
                    options.profile.as_deref(),
                    options.level,
                    options.audio.as_deref(),
                )?;
                if derived.is_empty() {
                    None
                } else {
                    Some(derived)
                }
            }
        };

        let resolution = match (options.width, options.height) {
            (Some(width), Some(height)) => Some(Resolution { width, height }),
            _ => None,
        };

        let entry = StreamEntry {
            program_id: program_id.into(),
            bandwidth,
            codecs,
            resolution,
            uri: uri.into(),
        };
        tracing::debug!("Adding variant stream {} ({} bps)", entry.uri, bandwidth);
        self.entries.push(Entry::Stream(entry));
        Ok(())
    }

    /// Append a media segment row
    pub fn add_segment(&mut self, duration: f64, uri: impl Into<String>) -> Result<()> {
        self.push_segment(SegmentEntry {
            duration,
            uri: uri.into(),
            title: None,
        })
    }

    /// Append a media segment row with an EXTINF title
    pub fn add_segment_with_title(
        &mut self,
        duration: f64,
        uri: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<()> {
        self.push_segment(SegmentEntry {
            duration,
            uri: uri.into(),
            title: Some(title.into()),
        })
    }

    fn push_segment(&mut self, entry: SegmentEntry) -> Result<()> {
        if self.kind() == PlaylistKind::Master {
            return Err(PlaylistTypeError::SegmentNotAllowed.into());
        }
        tracing::debug!("Adding segment {} ({}s)", entry.uri, entry.duration);
        self.entries.push(Entry::Segment(entry));
        Ok(())
    }

    /// Serialize the playlist to its M3U8 text form
    ///
    /// Validation runs before any text is produced; a mixed playlist yields
    /// no output at all. An empty playlist renders the bare `#EXTM3U` line.
    pub fn render(&self) -> Result<String> {
        if !self.is_valid() {
            return Err(PlaylistTypeError::Mixed.into());
        }

        let output = match self.kind() {
            PlaylistKind::Master => generate_master_playlist(self),
            PlaylistKind::Media => generate_media_playlist(self),
            PlaylistKind::Unset => "#EXTM3U\n".to_string(),
        };
        tracing::debug!(
            "Rendered {:?} playlist: {} entries, {} bytes",
            self.kind(),
            self.entries.len(),
            output.len()
        );
        Ok(output)
    }

    /// Write the rendered playlist to an output sink
    ///
    /// The sink receives the complete document in a single write, so an
    /// invalid playlist leaves it untouched. The sink is neither flushed
    /// nor closed.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        let output = self.render()?;
        sink.write_all(output.as_bytes())?;
        Ok(())
    }
}
