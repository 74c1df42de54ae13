// SPDX-License-Identifier: MPL-2.0
use crate::application::port::CatalogError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Image(ImageLoadError),
}

/// Specific error types for artwork image loading.
/// Used to pick the broken-image affordance and to log failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    /// The request could not be completed (DNS, TLS, timeout, refused connection).
    Network(String),

    /// The source answered but has no image at that location.
    NotFound(String),

    /// The bytes were received but are not a decodable image.
    Decode(String),
}

impl ImageLoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageLoadError::Network(_) => "error-image-network",
            ImageLoadError::NotFound(_) => "error-image-not-found",
            ImageLoadError::Decode(_) => "error-image-decode",
        }
    }

    /// Classifies an HTTP status code returned for an image request.
    pub fn from_status(status: u16, url: &str) -> Self {
        match status {
            404 | 410 => ImageLoadError::NotFound(url.to_string()),
            _ => ImageLoadError::Network(format!("HTTP {} for {}", status, url)),
        }
    }
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Network(msg) => write!(f, "Network error: {}", msg),
            ImageLoadError::NotFound(url) => write!(f, "Image not found: {}", url),
            ImageLoadError::Decode(msg) => write!(f, "Image could not be decoded: {}", msg),
        }
    }
}

impl std::error::Error for ImageLoadError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<ImageLoadError> for Error {
    fn from(err: ImageLoadError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Image(ImageLoadError::Network(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_converts() {
        let err: Error = CatalogError::Unavailable("offline".into()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::Unavailable(_))));
        assert!(format!("{}", err).starts_with("Catalog Error:"));
    }

    #[test]
    fn image_error_from_status() {
        assert_eq!(
            ImageLoadError::from_status(404, "/a.jpg"),
            ImageLoadError::NotFound("/a.jpg".into())
        );
        assert!(matches!(
            ImageLoadError::from_status(503, "/a.jpg"),
            ImageLoadError::Network(msg) if msg.contains("503")
        ));
    }

    #[test]
    fn image_error_i18n_keys() {
        assert_eq!(
            ImageLoadError::Network(String::new()).i18n_key(),
            "error-image-network"
        );
        assert_eq!(
            ImageLoadError::NotFound(String::new()).i18n_key(),
            "error-image-not-found"
        );
        assert_eq!(
            ImageLoadError::Decode(String::new()).i18n_key(),
            "error-image-decode"
        );
    }

    #[test]
    fn image_error_display_mentions_source() {
        let err = ImageLoadError::NotFound("/missing.jpg".into());
        assert!(format!("{}", err).contains("/missing.jpg"));
    }
}
