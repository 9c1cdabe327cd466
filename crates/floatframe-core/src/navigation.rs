//! URL normalization for the embedded viewer.

use thiserror::Error;
use url::Url;

/// Navigation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Please enter a URL.")]
    Empty,
    #[error("Invalid URL {input:?}: {reason}")]
    Invalid { input: String, reason: String },
}

/// Receives validated URLs for display in the embedded viewer.
pub trait ContentLoader {
    fn load(&mut self, url: &str);
}

/// Check for an `http://` or `https://` prefix, ignoring ASCII case.
fn has_web_scheme(input: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Normalize user input into a loadable URL.
///
/// Surrounding whitespace is trimmed and `https://` is prepended when no
/// web scheme is present. The result must parse as an absolute URL.
pub fn normalize_url(input: &str) -> Result<String, NavigationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NavigationError::Empty);
    }

    let url = if has_web_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    Url::parse(&url).map_err(|e| NavigationError::Invalid {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    Ok(url)
}

/// Normalize `input` and hand the result to `loader`.
pub fn navigate<L: ContentLoader + ?Sized>(
    loader: &mut L,
    input: &str,
) -> Result<String, NavigationError> {
    let url = normalize_url(input)?;
    log::info!("Loading {}", url);
    loader.load(&url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingLoader {
        loaded: Vec<String>,
    }

    impl ContentLoader for RecordingLoader {
        fn load(&mut self, url: &str) {
            self.loaded.push(url.to_string());
        }
    }

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
    }

    #[test]
    fn test_existing_scheme_kept() {
        assert_eq!(normalize_url("http://example.com/a").unwrap(), "http://example.com/a");
        assert_eq!(normalize_url("https://example.com").unwrap(), "https://example.com");
        assert_eq!(normalize_url("HTTPS://example.com").unwrap(), "HTTPS://example.com");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(normalize_url("  example.com/path \t").unwrap(), "https://example.com/path");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(normalize_url(""), Err(NavigationError::Empty));
        assert_eq!(normalize_url("   "), Err(NavigationError::Empty));
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(matches!(
            normalize_url("https://"),
            Err(NavigationError::Invalid { .. })
        ));
    }

    #[test]
    fn test_navigate_hands_normalized_url_to_loader() {
        let mut loader = RecordingLoader::default();
        let url = navigate(&mut loader, "example.com").unwrap();
        assert_eq!(url, "https://example.com");
        assert_eq!(loader.loaded, vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_navigate_empty_does_not_load() {
        let mut loader = RecordingLoader::default();
        assert_eq!(navigate(&mut loader, " "), Err(NavigationError::Empty));
        assert!(loader.loaded.is_empty());
    }
}
