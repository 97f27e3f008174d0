//! `YouTube` URL shape check.
//!
//! The check is deliberately permissive: it only looks at the host part and
//! requires *something* after the first slash. It never touches the network.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Accepted URL shape: optional scheme, optional `www.`, a `YouTube` host, then a path.
pub const YOUTUBE_URL_PATTERN: &str = r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$";

static YOUTUBE_URL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(YOUTUBE_URL_PATTERN).ok());

/// Returns `true` if `url` matches [`YOUTUBE_URL_PATTERN`].
///
/// The input is matched as given; callers are expected to trim first.
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL_RE.as_ref().is_some_and(|re| re.is_match(url))
}

/// Trim `raw` and check it is a non-empty `YouTube` URL.
///
/// Trimming strips Unicode whitespace and byte-order marks. Returns the trimmed URL on success.
///
/// # Examples
///
/// ```rust
/// use infographic_core::youtube::validate_youtube_url;
///
/// assert_eq!(validate_youtube_url("  youtu.be/abc123 ").unwrap(), "youtu.be/abc123");
/// assert!(validate_youtube_url("vimeo.com/123").is_err());
/// ```
pub fn validate_youtube_url(raw: &str) -> Result<&str> {
    let url = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    if url.is_empty() {
        debug!("Rejected empty URL");
        return Err(Error::EmptyUrl);
    }

    if !is_valid_youtube_url(url) {
        debug!("Rejected non-YouTube URL: {}", url);
        return Err(Error::InvalidUrl(url.to_string()));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_forms() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/shorts/abc123def45",
            "www.youtube.com/watch?v=x",
            "https://youtu.be/dQw4w9WgXcQ?t=30",
            "youtu.be/abc123",
        ] {
            assert!(is_valid_youtube_url(url), "expected {url} to be accepted");
        }
    }

    #[test]
    fn test_accepts_dotless_short_host() {
        // `youtu\.?be` makes the dot optional
        assert!(is_valid_youtube_url("youtube/abc"));
    }

    #[test]
    fn test_rejects_other_hosts() {
        for url in [
            "vimeo.com/123",
            "https://vimeo.com/123456789",
            "https://example.com/youtube.com/watch",
            "ftp://youtube.com/watch?v=x",
            "https://m.youtube.com/watch?v=x",
        ] {
            assert!(!is_valid_youtube_url(url), "expected {url} to be rejected");
        }
    }

    #[test]
    fn test_requires_a_path() {
        assert!(!is_valid_youtube_url("https://youtube.com"));
        assert!(!is_valid_youtube_url("https://youtube.com/"));
        assert!(!is_valid_youtube_url("youtu.be/"));
    }

    #[test]
    fn test_validate_trims_input() {
        let url = validate_youtube_url("\t https://youtu.be/abc \n").unwrap();
        assert_eq!(url, "https://youtu.be/abc");
    }

    #[test]
    fn test_validate_strips_byte_order_mark() {
        assert_eq!(validate_youtube_url("\u{feff}youtu.be/abc").unwrap(), "youtu.be/abc");
        assert_eq!(
            validate_youtube_url("\u{a0}youtu.be/abc\u{feff}\u{2028}").unwrap(),
            "youtu.be/abc"
        );
        assert!(matches!(validate_youtube_url("\u{feff} "), Err(Error::EmptyUrl)));
    }

    #[test]
    fn test_validate_empty_and_whitespace() {
        assert!(matches!(validate_youtube_url(""), Err(Error::EmptyUrl)));
        assert!(matches!(validate_youtube_url("   \n"), Err(Error::EmptyUrl)));
    }

    #[test]
    fn test_validate_invalid_keeps_trimmed_input() {
        match validate_youtube_url(" vimeo.com/123 ") {
            Err(Error::InvalidUrl(url)) => assert_eq!(url, "vimeo.com/123"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
