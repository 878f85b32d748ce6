//! Media playlist rendering
//!
//! Serializes the header tags, `#EXTINF` segment rows, and the closing
//! `#EXT-X-ENDLIST` of a media playlist.

use super::Playlist;
use crate::types::Entry;

/// Render a media playlist
///
/// The four header tags reflect the playlist's configured
/// version/sequence/cache/target. Durations render with the value's
/// natural decimal representation, and the comma after the duration is
/// mandatory whether or not a title follows.
pub fn generate_media_playlist(playlist: &Playlist) -> String {
    let mut output = String::new();

    // Header
    output.push_str("#EXTM3U\n");
    output.push_str(&format!("#EXT-X-VERSION:{}\n", playlist.version));
    output.push_str(&format!("#EXT-X-MEDIA-SEQUENCE:{}\n", playlist.sequence));
    output.push_str(&format!(
        "#EXT-X-ALLOW-CACHE:{}\n",
        if playlist.cache { "YES" } else { "NO" }
    ));
    output.push_str(&format!("#EXT-X-TARGETDURATION:{}\n", playlist.target));

    // Segment rows
    for entry in &playlist.entries {
        if let Entry::Segment(segment) = entry {
            output.push_str(&format!("#EXTINF:{},", segment.duration));
            if let Some(title) = &segment.title {
                output.push_str(title);
            }
            output.push('\n');
            output.push_str(&segment.uri);
            output.push('\n');
        }
    }

    // End list
    output.push_str("#EXT-X-ENDLIST\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentEntry;

    fn segment(duration: f64, uri: &str) -> SegmentEntry {
        SegmentEntry {
            duration,
            uri: uri.to_string(),
            title: None,
        }
    }

    #[test]
    fn test_header_reflects_settings() {
        let mut playlist = Playlist::new();
        playlist.version = 1;
        playlist.sequence = 1;
        playlist.cache = false;
        playlist.target = 12;
        playlist
            .entries
            .push(Entry::Segment(segment(11.344644, "1080-7mbps00000.ts")));

        assert_eq!(
            generate_media_playlist(&playlist),
            "#EXTM3U\n\
             #EXT-X-VERSION:1\n\
             #EXT-X-MEDIA-SEQUENCE:1\n\
             #EXT-X-ALLOW-CACHE:NO\n\
             #EXT-X-TARGETDURATION:12\n\
             #EXTINF:11.344644,\n\
             1080-7mbps00000.ts\n\
             #EXT-X-ENDLIST\n"
        );
    }

    #[test]
    fn test_duration_keeps_full_precision() {
        let mut playlist = Playlist::new();
        playlist
            .entries
            .push(Entry::Segment(segment(11.261233, "a.ts")));

        let output = generate_media_playlist(&playlist);
        assert!(output.contains("#EXTINF:11.261233,\n"));
    }

    #[test]
    fn test_title_after_comma() {
        let mut playlist = Playlist::new();
        playlist.entries.push(Entry::Segment(SegmentEntry {
            title: Some("Opening".to_string()),
            ..segment(9.0, "a.ts")
        }));

        let output = generate_media_playlist(&playlist);
        assert!(output.contains("#EXTINF:9,Opening\na.ts\n"));
    }

    #[test]
    fn test_segments_in_insertion_order() {
        let mut playlist = Playlist::new();
        playlist.entries.push(Entry::Segment(segment(4.0, "a.ts")));
        playlist.entries.push(Entry::Segment(segment(4.0, "b.ts")));

        let output = generate_media_playlist(&playlist);
        assert!(output.find("a.ts").unwrap() < output.find("b.ts").unwrap());
        assert!(output.ends_with("#EXT-X-ENDLIST\n"));
    }
}
