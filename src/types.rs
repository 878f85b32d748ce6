use std::fmt;

/// Pixel dimensions advertised on a variant stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A variant stream row of a master playlist
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEntry {
    pub program_id: String,
    pub bandwidth: u64,
    /// Rendered as `CODECS="..."`; omitted when `None`
    pub codecs: Option<String>,
    /// Rendered as `RESOLUTION=WxH`; omitted when `None`
    pub resolution: Option<Resolution>,
    /// URI of the referenced variant playlist
    pub uri: String,
}

/// A media segment row of a media playlist
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentEntry {
    /// Segment duration in seconds
    pub duration: f64,
    pub uri: String,
    /// Optional EXTINF title, rendered after the duration's comma
    pub title: Option<String>,
}

/// A single playlist row
///
/// The variant is fixed at construction; the first entry appended to a
/// playlist determines the playlist's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Stream(StreamEntry),
    Segment(SegmentEntry),
}

impl Entry {
    /// The playlist kind this entry belongs in
    pub fn kind(&self) -> PlaylistKind {
        match self {
            Entry::Stream(_) => PlaylistKind::Master,
            Entry::Segment(_) => PlaylistKind::Media,
        }
    }
}

/// Playlist classification, derived from the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    /// No entries yet; the first append decides
    Unset,
    /// References variant playlists
    Master,
    /// References media segments
    Media,
}

/// Optional attributes for a variant stream entry
///
/// `width` and `height` must both be present for a RESOLUTION attribute to
/// be emitted. `codecs` overrides derivation from profile/level/audio.
#[derive(Debug, Clone, Default)]
pub struct StreamOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// H.264 profile name: "baseline", "main" or "high"
    pub profile: Option<String>,
    /// H.264 level, e.g. 3.0 or 4.1
    pub level: Option<f64>,
    /// Symbolic audio codec name, e.g. "aac-lc" or "mp3"
    pub audio: Option<String>,
    /// Explicit CODECS attribute value; skips derivation entirely
    pub codecs: Option<String>,
}
