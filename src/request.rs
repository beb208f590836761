use std::path::MAIN_SEPARATOR;

use crate::error::AppError;

/// Host markers a URL must contain to be handed to the downloader.
const URL_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Requested quality, picked from the numbered quality menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Best,
    P720,
    P480,
    AudioOnly,
}

impl Quality {
    /// Map a quality menu answer to a selection.
    ///
    /// Anything other than "2", "3" or "4" (empty input and typos included)
    /// selects [`Quality::Best`].
    pub fn from_selection(input: &str) -> Self {
        match input.trim() {
            "2" => Self::P720,
            "3" => Self::P480,
            "4" => Self::AudioOnly,
            _ => Self::Best,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "best quality",
            Self::P720 => "720p",
            Self::P480 => "480p",
            Self::AudioOnly => "audio only (mp3)",
        }
    }
}

/// Whether `url` looks like something the downloader can fetch.
pub fn is_supported_url(url: &str) -> bool {
    URL_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Validate a URL typed at a prompt, trimming surrounding whitespace.
pub fn validate_url(input: &str) -> Result<String, AppError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(AppError::EmptyInput("URL"));
    }
    if !is_supported_url(url) {
        return Err(AppError::InvalidUrl(url.to_string()));
    }
    Ok(url.to_string())
}

/// Normalize an output directory so it always ends with a path separator.
///
/// An empty answer means the current directory. Idempotent.
pub fn normalize_dir(input: &str) -> String {
    let dir = input.trim();
    let mut dir = if dir.is_empty() {
        ".".to_string()
    } else {
        dir.to_string()
    };

    if !dir.chars().next_back().is_some_and(std::path::is_separator) {
        dir.push(MAIN_SEPARATOR);
    }
    dir
}

/// A validated download, built once per menu turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    output_dir: String,
    quality: Quality,
}

impl DownloadRequest {
    pub fn new(url: &str, output_dir: &str, quality: Quality) -> Result<Self, AppError> {
        Ok(Self {
            url: validate_url(url)?,
            output_dir: normalize_dir(output_dir),
            quality,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Output directory, always separator-terminated.
    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn quality_menu_mapping() {
        assert_eq!(Quality::from_selection("1"), Quality::Best);
        assert_eq!(Quality::from_selection("2"), Quality::P720);
        assert_eq!(Quality::from_selection(" 3 "), Quality::P480);
        assert_eq!(Quality::from_selection("4"), Quality::AudioOnly);
    }

    #[test]
    fn unrecognized_quality_falls_back_to_best() {
        for input in ["", "0", "5", "720", "best", "two"] {
            assert_eq!(Quality::from_selection(input), Quality::Best, "{input:?}");
        }
    }

    #[test]
    fn url_support_is_a_substring_check() {
        let cases = [
            ("https://www.youtube.com/watch?v=abc", true),
            ("https://youtu.be/abc", true),
            ("youtube.com", true),
            ("not even a url but youtu.be inside", true),
            ("https://vimeo.com/123", false),
            ("https://youtube.co/watch", false),
            ("", false),
        ];
        for (url, expected) in cases {
            let by_definition = url.contains("youtube.com") || url.contains("youtu.be");
            assert_eq!(is_supported_url(url), expected, "{url:?}");
            assert_eq!(is_supported_url(url), by_definition, "{url:?}");
        }
    }

    #[test]
    fn validate_url_distinguishes_empty_from_invalid() {
        assert_matches!(validate_url(""), Err(AppError::EmptyInput("URL")));
        assert_matches!(validate_url("   "), Err(AppError::EmptyInput("URL")));
        assert_matches!(validate_url("https://example.com"), Err(AppError::InvalidUrl(u)) if u == "https://example.com");
        assert_eq!(
            validate_url("  https://youtu.be/abc\n").unwrap(),
            "https://youtu.be/abc"
        );
    }

    #[test]
    fn empty_dir_is_current_dir() {
        assert_eq!(normalize_dir(""), format!(".{MAIN_SEPARATOR}"));
        assert_eq!(normalize_dir("  "), format!(".{MAIN_SEPARATOR}"));
    }

    #[test]
    fn dir_gets_trailing_separator() {
        assert_eq!(normalize_dir("videos"), format!("videos{MAIN_SEPARATOR}"));
        assert_eq!(normalize_dir("videos/"), "videos/");
    }

    #[test]
    fn normalize_dir_is_idempotent() {
        for input in ["", ".", "videos", "videos/", "/tmp/out", "a/b/c/"] {
            let once = normalize_dir(input);
            assert_eq!(normalize_dir(&once), once, "{input:?}");
        }
    }

    #[test]
    fn request_rejects_bad_url_before_touching_dir() {
        assert_matches!(
            DownloadRequest::new("", "out", Quality::Best),
            Err(AppError::EmptyInput(_))
        );
        assert_matches!(
            DownloadRequest::new("ftp://files", "out", Quality::Best),
            Err(AppError::InvalidUrl(_))
        );
    }

    #[test]
    fn request_holds_normalized_values() {
        let req = DownloadRequest::new("https://youtube.com/watch?v=abc", "", Quality::P720).unwrap();
        assert_eq!(req.url(), "https://youtube.com/watch?v=abc");
        assert_eq!(req.output_dir(), format!(".{MAIN_SEPARATOR}"));
        assert_eq!(req.quality(), Quality::P720);
    }
}
