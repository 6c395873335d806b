//! Manifest resolution: inline list, then `manifest.json`, then fallback.
//!
//! DESIGN
//! ======
//! The decision is split into pure steps (`resolve_inline`,
//! `resolve_fetched`) and one async driver that takes the fetcher as a
//! parameter. The browser fetch lives in `net::api`; tests pass fakes.
//!
//! ERROR HANDLING
//! ==============
//! Network errors, non-OK statuses, and malformed JSON all land on the same
//! fallback branch. There is no retry and no timeout.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::future::Future;

use super::error::ManifestError;
use super::types::{ImageListResult, ImageSource, ManifestDocument};
use crate::config::GalleryConfig;
use crate::util::environment::PageEnvironment;
use crate::util::image_files::filter_image_files;

/// Use the inline file list when the page runs from disk and the list has
/// at least one image after filtering.
pub fn resolve_inline(env: &PageEnvironment) -> Option<ImageListResult> {
    if !env.using_file_protocol {
        return None;
    }
    let files = filter_image_files(env.inline_files.as_ref()?.iter().cloned());
    if files.is_empty() {
        return None;
    }
    Some(ImageListResult {
        files,
        source: ImageSource::Inline,
        error: None,
        using_file_protocol: true,
    })
}

/// Turn the manifest fetch outcome into a result, falling back on any error.
pub fn resolve_fetched(
    config: &GalleryConfig,
    using_file_protocol: bool,
    outcome: Result<ManifestDocument, ManifestError>,
) -> ImageListResult {
    match outcome {
        Ok(document) => ImageListResult {
            files: filter_image_files(document.entries),
            source: ImageSource::Manifest,
            error: None,
            using_file_protocol,
        },
        Err(error) => {
            let source = if using_file_protocol {
                ImageSource::FallbackFile
            } else {
                ImageSource::Fallback
            };
            log::warn!("{error}; using {source} list");
            ImageListResult {
                files: filter_image_files(config.fallback_files.iter().cloned()),
                source,
                error: Some(error),
                using_file_protocol,
            }
        }
    }
}

/// Resolve the gallery's file list for one page load or refresh.
///
/// `fetch` receives the manifest URL and is only called when no inline list
/// applies.
pub async fn load_image_list<F, Fut>(config: &GalleryConfig, env: &PageEnvironment, fetch: F) -> ImageListResult
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<ManifestDocument, ManifestError>>,
{
    if let Some(result) = resolve_inline(env) {
        log::info!("using inline manifest ({} files)", result.files.len());
        return result;
    }

    let result = resolve_fetched(config, env.using_file_protocol, fetch(config.manifest_url()).await);
    if result.source == ImageSource::Manifest {
        log::info!("loaded manifest ({} files)", result.files.len());
    }
    result
}
