// SPDX-License-Identifier: MPL-2.0
//! Subcategory CSV parsing.
//!
//! Each subcategory file is a one-column list of image locations under a
//! header line. Rows are loosely formatted: a value may be quoted, followed
//! by further columns, or surrounded by whitespace. The first usable token of
//! each row is kept.

use crate::config::FEATURED_PER_SUBCATEGORY;
use crate::domain::artwork::{ArtworkRecord, Category};
use regex::Regex;
use std::sync::LazyLock;

/// An absolute URL up to whitespace or comma, else a quoted value, else the
/// first run of characters that are neither comma nor whitespace.
static ROW_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:https?://[^\s,]+)|(?:"([^"]+)")|([^,\s]+)"#).expect("static pattern is valid")
});

/// Extracts image locations from CSV text, skipping the header line.
///
/// Blank rows are dropped, so the returned positions count only usable rows.
#[must_use]
pub fn parse_image_csv(text: &str) -> Vec<String> {
    text.lines().skip(1).filter_map(row_token).collect()
}

fn row_token(line: &str) -> Option<String> {
    let captures = ROW_TOKEN.captures(line)?;
    let token = captures.get(1).or_else(|| captures.get(0))?.as_str().trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Keeps absolute (`http…`) and root-relative (`/…`) locations, and makes
/// anything else root-relative.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http") || url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// Builds the ordered records of one subcategory file.
///
/// `resolve` maps a normalized location onto something loadable from the
/// catalog source (a file path or a full URL).
pub fn build_records(
    category: Category,
    subcategory: &str,
    urls: &[String],
    resolve: impl Fn(&str) -> String,
) -> Vec<ArtworkRecord> {
    urls.iter()
        .enumerate()
        .map(|(index, url)| {
            let id = format!("{}-{}-{}", category.id_prefix(), subcategory, index);
            ArtworkRecord::new(id, resolve(&normalize_url(url)), category, subcategory)
                .featured(index < FEATURED_PER_SUBCATEGORY)
        })
        .collect()
}
