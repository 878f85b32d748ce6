//! HLS codec string derivation
//!
//! Maps symbolic profile/level/audio descriptors to the CODECS attribute
//! value advertised in `#EXT-X-STREAM-INF` rows.

use crate::error::CodecError;

/// Codec tag for an H.264 profile/level pair
///
/// Only published pairs are mapped; anything else is an error rather than a
/// guess. The two low-profile 3.0 tags keep the legacy RFC 4281 dotted form
/// that players have historically matched on.
pub fn h264_codec_tag(profile: &str, level: f64) -> Result<&'static str, CodecError> {
    // Levels are compared in tenths so 4.1 matches exactly
    let tenths = (level * 10.0).round() as u32;

    let tag = match profile.to_ascii_lowercase().as_str() {
        "baseline" => match tenths {
            30 => Some("avc1.66.30"),
            31 => Some("avc1.42001f"),
            _ => None,
        },
        "main" => match tenths {
            30 => Some("avc1.77.30"),
            31 => Some("avc1.4d001f"),
            40 => Some("avc1.4d0028"),
            _ => None,
        },
        "high" => match tenths {
            31 => Some("avc1.64001f"),
            40 | 41 => Some("avc1.640028"),
            _ => None,
        },
        _ => return Err(CodecError::UnknownProfile(profile.to_string())),
    };

    tag.ok_or_else(|| CodecError::UnsupportedProfileLevel {
        profile: profile.to_string(),
        level,
    })
}

/// Codec tag for a symbolic audio codec name
pub fn audio_codec_tag(audio: &str) -> Result<&'static str, CodecError> {
    match audio {
        "aac-lc" => Ok("mp4a.40.2"),
        "he-aac" => Ok("mp4a.40.5"),
        "mp3" => Ok("mp4a.40.34"),
        _ => Err(CodecError::UnknownAudio(audio.to_string())),
    }
}

/// Build the comma-joined CODECS attribute value
///
/// Video tag first, then audio. The video tag requires both profile and
/// level; either side is skipped when its descriptors are absent, and the
/// result is empty when both are.
pub fn codecs(
    profile: Option<&str>,
    level: Option<f64>,
    audio: Option<&str>,
) -> Result<String, CodecError> {
    let mut tags: Vec<&'static str> = Vec::new();

    if let (Some(profile), Some(level)) = (profile, level) {
        tags.push(h264_codec_tag(profile, level)?);
    }
    if let Some(audio) = audio {
        tags.push(audio_codec_tag(audio)?);
    }

    Ok(tags.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h264_codec_tags() {
        assert_eq!(h264_codec_tag("baseline", 3.0), Ok("avc1.66.30"));
        assert_eq!(h264_codec_tag("main", 3.1), Ok("avc1.4d001f"));
        assert_eq!(h264_codec_tag("high", 4.0), Ok("avc1.640028"));
        assert_eq!(h264_codec_tag("high", 4.1), Ok("avc1.640028"));

        // Case-insensitive profile names
        assert_eq!(h264_codec_tag("High", 4.1), Ok("avc1.640028"));
    }

    #[test]
    fn test_unknown_profile() {
        assert_eq!(
            h264_codec_tag("ultra", 4.1),
            Err(CodecError::UnknownProfile("ultra".to_string()))
        );
    }

    #[test]
    fn test_unsupported_level() {
        assert_eq!(
            h264_codec_tag("baseline", 5.2),
            Err(CodecError::UnsupportedProfileLevel {
                profile: "baseline".to_string(),
                level: 5.2,
            })
        );
    }

    #[test]
    fn test_audio_codec_tags() {
        assert_eq!(audio_codec_tag("aac-lc"), Ok("mp4a.40.2"));
        assert_eq!(audio_codec_tag("he-aac"), Ok("mp4a.40.5"));
        assert_eq!(audio_codec_tag("mp3"), Ok("mp4a.40.34"));
        assert_eq!(
            audio_codec_tag("wma"),
            Err(CodecError::UnknownAudio("wma".to_string()))
        );
    }

    #[test]
    fn test_codecs_video_then_audio() {
        assert_eq!(
            codecs(Some("high"), Some(4.1), Some("aac-lc")).unwrap(),
            "avc1.640028,mp4a.40.2"
        );
        assert_eq!(
            codecs(Some("baseline"), Some(3.0), Some("aac-lc")).unwrap(),
            "avc1.66.30,mp4a.40.2"
        );
    }

    #[test]
    fn test_codecs_audio_only() {
        assert_eq!(codecs(None, None, Some("mp3")).unwrap(), "mp4a.40.34");
        // Profile without level: no video tag
        assert_eq!(
            codecs(Some("high"), None, Some("mp3")).unwrap(),
            "mp4a.40.34"
        );
    }

    #[test]
    fn test_codecs_empty() {
        assert_eq!(codecs(None, None, None).unwrap(), "");
        assert_eq!(codecs(None, Some(4.1), None).unwrap(), "");
    }
}
