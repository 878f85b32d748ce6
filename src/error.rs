use thiserror::Error;

/// Main error type for the playlist library
#[derive(Error, Debug)]
pub enum Error {
    /// An operation violated the playlist's kind consistency
    #[error(transparent)]
    PlaylistType(#[from] PlaylistTypeError),

    /// A codec descriptor could not be resolved
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A standard I/O error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Playlist kind-consistency errors
///
/// The message text is part of the contract; callers match on it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistTypeError {
    /// A media segment was appended to a playlist already holding streams
    #[error("Playlist is a master playlist, segment can not be added.")]
    SegmentNotAllowed,

    /// A variant stream was appended to a playlist already holding segments
    #[error("Playlist is not a master playlist, playlist can not be added.")]
    StreamNotAllowed,

    /// The playlist holds both variant streams and media segments
    #[error("Playlist is invalid.")]
    Mixed,
}

/// Codec descriptor resolution errors
///
/// A descriptor that is not recognized fails loudly; a guessed codec string
/// corrupts player behavior downstream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The H.264 profile name is not one of baseline/main/high
    #[error("Unknown H.264 profile: {0}")]
    UnknownProfile(String),

    /// The profile/level pair has no published codec tag
    #[error("Unsupported H.264 profile/level combination: {profile} {level}")]
    UnsupportedProfileLevel { profile: String, level: f64 },

    /// The symbolic audio codec name is not recognized
    #[error("Unknown audio codec: {0}")]
    UnknownAudio(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
