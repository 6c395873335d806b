//! Resolved image-list types and the manifest document format.
//!
//! DESIGN
//! ======
//! A manifest is either a bare JSON array or an object with a `files`
//! array. Anything else that parses as JSON is treated as an empty listing;
//! `null` is rejected because it cannot carry a listing at all.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::error::ManifestError;

/// Where the displayed file list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Window global injected by a generated `manifest.js` (file protocol only).
    Inline,
    /// `manifest.json` fetched from the image folder.
    Manifest,
    /// Manifest failed over http(s).
    Fallback,
    /// Manifest failed while the page was opened from disk.
    FallbackFile,
}

impl ImageSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Manifest => "manifest",
            Self::Fallback => "fallback",
            Self::FallbackFile => "fallback-file",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one resolution pass. Replaced wholesale on refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageListResult {
    pub files: Vec<String>,
    pub source: ImageSource,
    pub error: Option<ManifestError>,
    pub using_file_protocol: bool,
}

impl ImageListResult {
    /// `"1 image"` / `"N images"`.
    pub fn count_label(&self) -> String {
        let count = self.files.len();
        let suffix = if count == 1 { "" } else { "s" };
        format!("{count} image{suffix}")
    }
}

/// Parsed manifest entries, stringified but not yet filtered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestDocument {
    pub entries: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawManifest {
    List(Vec<Value>),
    Listing { files: Vec<Value> },
    Other(Value),
}

impl ManifestDocument {
    /// Parse a manifest response body.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for malformed JSON or a `null` document.
    pub fn from_json_str(body: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(body).map_err(|e| ManifestError::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value as a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for a `null` document.
    pub fn from_value(value: Value) -> Result<Self, ManifestError> {
        let raw = serde_json::from_value::<RawManifest>(value).map_err(|e| ManifestError::Parse(e.to_string()))?;
        let items = match raw {
            RawManifest::List(items) | RawManifest::Listing { files: items } => items,
            RawManifest::Other(Value::Null) => {
                return Err(ManifestError::Parse("manifest is null".to_owned()));
            }
            RawManifest::Other(_) => Vec::new(),
        };
        Ok(Self { entries: items.into_iter().map(stringify_entry).collect() })
    }
}

/// String form of a manifest entry, matching how a browser coerces values to strings.
fn stringify_entry(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => "null".to_owned(),
        Value::Object(_) => "[object Object]".to_owned(),
        Value::Array(items) => items
            .into_iter()
            .map(|item| if item.is_null() { String::new() } else { stringify_entry(item) })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
