// SPDX-License-Identifier: MPL-2.0
//! CSV-backed [`CatalogProvider`].

use super::csv::{build_records, parse_image_csv};
use super::source::CatalogSource;
use crate::application::port::{CatalogError, CatalogFuture, CatalogProvider};
use crate::config::CatalogConfig;
use crate::domain::artwork::{ArtworkRecord, Category};
use crate::infrastructure::image::http_client;
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Reads per-subcategory CSV files and caches the result per category.
///
/// Cloning is cheap; clones share the cache.
#[derive(Clone)]
pub struct CsvCatalogProvider {
    inner: Arc<Inner>,
}

struct Inner {
    source: CatalogSource,
    client: reqwest::Client,
    subcategories: HashMap<Category, Vec<String>>,
    latency: Duration,
    cache: Mutex<HashMap<Category, Vec<ArtworkRecord>>>,
}

impl std::fmt::Debug for CsvCatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvCatalogProvider")
            .field("source", &self.inner.source)
            .field("latency", &self.inner.latency)
            .finish_non_exhaustive()
    }
}

impl CsvCatalogProvider {
    /// Creates a provider reading `source` with the subcategory lists and
    /// latency from `config`.
    #[must_use]
    pub fn new(source: CatalogSource, config: &CatalogConfig) -> Self {
        let client = http_client();

        let subcategories = Category::ALL
            .into_iter()
            .map(|category| (category, config.subcategories(category)))
            .collect();

        Self {
            inner: Arc::new(Inner {
                source,
                client,
                subcategories,
                latency: config.latency(),
                cache: Mutex::new(HashMap::new()),
            }),
        }
    }

    #[must_use]
    pub fn source(&self) -> &CatalogSource {
        &self.inner.source
    }
}

impl Inner {
    fn subcategories(&self, category: Category) -> Vec<String> {
        self.subcategories.get(&category).cloned().unwrap_or_default()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn artworks(&self, category: Category) -> Result<Vec<ArtworkRecord>, CatalogError> {
        // Held across the load so concurrent callers wait for one read.
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.get(&category) {
            return Ok(cached.clone());
        }

        self.source.probe().await?;

        let subcategories = self.subcategories(category);
        let reads = subcategories.iter().map(|subcategory| async move {
            let result = self
                .source
                .read_csv(&self.client, category, subcategory)
                .await;
            (subcategory, result)
        });

        let mut records = Vec::new();
        let mut any_read = false;
        for (subcategory, result) in join_all(reads).await {
            match result {
                Ok(text) => {
                    any_read = true;
                    let urls = parse_image_csv(&text);
                    log::debug!(
                        "Catalog {category}/{subcategory}: {} artworks",
                        urls.len()
                    );
                    records.extend(build_records(category, subcategory, &urls, |url| {
                        self.source.resolve_image(url)
                    }));
                }
                Err(err) => {
                    log::warn!("Skipping {category}/{subcategory}: {err}");
                }
            }
        }

        log::debug!("Catalog {category}: {} artworks loaded", records.len());
        if any_read {
            cache.insert(category, records.clone());
        }
        Ok(records)
    }
}

impl CatalogProvider for CsvCatalogProvider {
    fn list_artworks(&self, category: Category) -> CatalogFuture<Vec<ArtworkRecord>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            inner.simulate_latency().await;
            inner.artworks(category).await
        })
    }

    fn list_categories(&self, category: Category) -> CatalogFuture<Vec<String>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            inner.simulate_latency().await;
            Ok(inner.subcategories(category))
        })
    }

    fn list_featured(&self) -> CatalogFuture<Vec<ArtworkRecord>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            inner.simulate_latency().await;
            let mut featured = Vec::new();
            for category in Category::ALL {
                let artworks = inner.artworks(category).await?;
                featured.extend(artworks.into_iter().filter(|artwork| artwork.featured));
            }
            Ok(featured)
        })
    }
}
