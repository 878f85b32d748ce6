//! Master playlist rendering
//!
//! Serializes the `#EXT-X-STREAM-INF` rows that reference variant
//! playlists.

use super::Playlist;
use crate::types::Entry;

/// Render a master playlist
///
/// One STREAM-INF row plus URI line per entry, in insertion order.
/// Attribute order is fixed: PROGRAM-ID, then RESOLUTION and CODECS when
/// present, then BANDWIDTH last.
pub fn generate_master_playlist(playlist: &Playlist) -> String {
    let mut output = String::new();

    // Header
    output.push_str("#EXTM3U\n");

    for entry in &playlist.entries {
        if let Entry::Stream(stream) = entry {
            output.push_str(&format!(
                "#EXT-X-STREAM-INF:PROGRAM-ID={}",
                stream.program_id
            ));
            if let Some(resolution) = stream.resolution {
                output.push_str(&format!(",RESOLUTION={}", resolution));
            }
            if let Some(codecs) = &stream.codecs {
                output.push_str(&format!(",CODECS=\"{}\"", codecs));
            }
            output.push_str(&format!(",BANDWIDTH={}\n", stream.bandwidth));
            output.push_str(&stream.uri);
            output.push('\n');
        }
    }

    output
}
