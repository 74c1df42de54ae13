// SPDX-License-Identifier: MPL-2.0
//! Artwork image fetching.
//!
//! Sources are either `http(s)://` URLs or local paths produced by a
//! directory catalog. The bytes are probed for a known image format and
//! handed to Iced undecoded; the renderer decodes them lazily.

use crate::error::ImageLoadError;
use iced::widget::image;
use image_rs::ImageReader;
use std::io::Cursor;

const USER_AGENT: &str = concat!("PrintGallery/", env!("CARGO_PKG_VERSION"));

/// A fetched image ready to be drawn.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Encoded size, used for prefetch cache accounting.
    pub size_bytes: usize,
}

/// Builds the HTTP client shared by image loads.
#[must_use]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|err| {
            log::warn!("Falling back to default HTTP client: {err}");
            reqwest::Client::new()
        })
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches and validates the image at `source`.
pub async fn load_image(
    client: reqwest::Client,
    source: String,
) -> Result<LoadedImage, ImageLoadError> {
    let bytes = fetch_bytes(&client, &source).await?;
    let (width, height) = probe_dimensions(&bytes)
        .map_err(|msg| ImageLoadError::Decode(format!("{source}: {msg}")))?;
    let size_bytes = bytes.len();
    Ok(LoadedImage {
        handle: image::Handle::from_bytes(bytes),
        width,
        height,
        size_bytes,
    })
}

async fn fetch_bytes(client: &reqwest::Client, source: &str) -> Result<Vec<u8>, ImageLoadError> {
    if is_remote(source) {
        let response = client
            .get(source)
            .send()
            .await
            .map_err(|err| ImageLoadError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::from_status(status.as_u16(), source));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ImageLoadError::Network(err.to_string()))?;
        Ok(bytes.to_vec())
    } else {
        tokio::fs::read(source).await.map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ImageLoadError::NotFound(source.to_string()),
            _ => ImageLoadError::Network(format!("{source}: {err}")),
        })
    }
}

/// Reads the image header only; pixel data is left to the renderer.
fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| err.to_string())?
        .into_dimensions()
        .map_err(|err| err.to_string())
}

/// Requests a width-limited rendition from image hosts that honour a `w`
/// query parameter. Non-HTTP sources and a zero width are returned unchanged.
#[must_use]
pub fn with_size_hint(source: &str, width: u32) -> String {
    if width == 0 || !is_remote(source) {
        return source.to_string();
    }
    let Ok(mut url) = reqwest::Url::parse(source) else {
        return source.to_string();
    };
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "w")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("w", &width.to_string());
    url.to_string()
}
