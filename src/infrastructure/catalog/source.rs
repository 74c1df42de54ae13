// SPDX-License-Identifier: MPL-2.0
//! Catalog roots: a local directory or a remote base URL.
//!
//! Both hold the same layout, `<root>/<category-dir>/<subcategory>.csv`, and
//! root-relative image locations inside the CSV files resolve against the
//! same root.

use crate::application::port::CatalogError;
use crate::domain::artwork::Category;
use std::path::PathBuf;

/// Where catalog files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Directory(PathBuf),
    /// Base URL without trailing slash.
    Http(String),
}

impl CatalogSource {
    /// Interprets a `--catalog` argument or `[catalog] source` value.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Http(location.trim_end_matches('/').to_string())
        } else {
            CatalogSource::Directory(PathBuf::from(location))
        }
    }

    /// Location of one subcategory file, for logging and fetching.
    #[must_use]
    pub fn csv_location(&self, category: Category, subcategory: &str) -> String {
        match self {
            CatalogSource::Directory(root) => root
                .join(category.data_dir())
                .join(format!("{subcategory}.csv"))
                .display()
                .to_string(),
            CatalogSource::Http(base) => {
                format!("{base}/{}/{subcategory}.csv", category.data_dir())
            }
        }
    }

    /// Resolves a normalized image location against the root.
    #[must_use]
    pub fn resolve_image(&self, url: &str) -> String {
        if url.starts_with("http") {
            return url.to_string();
        }
        let relative = url.trim_start_matches('/');
        match self {
            CatalogSource::Directory(root) => root.join(relative).display().to_string(),
            CatalogSource::Http(base) => format!("{base}/{relative}"),
        }
    }

    /// Checks that the root can be used at all.
    ///
    /// Remote roots are only checked per request.
    pub async fn probe(&self) -> Result<(), CatalogError> {
        match self {
            CatalogSource::Directory(root) => match tokio::fs::metadata(root).await {
                Ok(meta) if meta.is_dir() => Ok(()),
                Ok(_) => Err(CatalogError::Unavailable(format!(
                    "{} is not a directory",
                    root.display()
                ))),
                Err(err) => Err(CatalogError::Unavailable(format!(
                    "{}: {err}",
                    root.display()
                ))),
            },
            CatalogSource::Http(_) => Ok(()),
        }
    }

    /// Reads one subcategory file.
    pub async fn read_csv(
        &self,
        client: &reqwest::Client,
        category: Category,
        subcategory: &str,
    ) -> Result<String, CatalogError> {
        let location = self.csv_location(category, subcategory);
        match self {
            CatalogSource::Directory(_) => tokio::fs::read_to_string(&location)
                .await
                .map_err(|err| match err.kind() {
                    std::io::ErrorKind::NotFound => CatalogError::NotFound(location.clone()),
                    std::io::ErrorKind::InvalidData => {
                        CatalogError::Malformed(format!("{location}: {err}"))
                    }
                    _ => CatalogError::Unavailable(format!("{location}: {err}")),
                }),
            CatalogSource::Http(_) => {
                let response = client
                    .get(&location)
                    .send()
                    .await
                    .map_err(|err| CatalogError::Unavailable(err.to_string()))?;
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Err(CatalogError::NotFound(location));
                }
                if !response.status().is_success() {
                    return Err(CatalogError::Unavailable(format!(
                        "HTTP status {} for {location}",
                        response.status()
                    )));
                }
                response
                    .text()
                    .await
                    .map_err(|err| CatalogError::Malformed(err.to_string()))
            }
        }
    }
}
