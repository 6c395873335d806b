//! Gallery list state and status line text.
//!
//! DESIGN
//! ======
//! Each refresh takes a sequence number. A resolution that finishes after a
//! newer refresh started is discarded, so the grid always reflects the most
//! recent request.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::{ImageListResult, ImageSource};

pub const LOADING_MESSAGE: &str = "Loading images…";

pub const FILE_PROTOCOL_MESSAGE: &str = "You opened this page from disk (file://). Generate images/manifest.js \
     to list the images inline, or serve this folder over HTTP (python -m http.server).";

pub const MANIFEST_UNAVAILABLE_MESSAGE: &str =
    "Could not load images/manifest.json. Create it (or run the manifest generator) so the page knows which images to show.";

pub const EMPTY_MANIFEST_MESSAGE: &str =
    "No images listed. Add files to /images and update images/manifest.json (files array).";

/// Resolved file list plus loading progress.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub loading: bool,
    pub result: Option<ImageListResult>,
    pub refresh_seq: u64,
}

impl GalleryState {
    /// Mark a refresh as started and return its sequence number.
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.loading = true;
        self.refresh_seq
    }

    /// Store `result` if `seq` is still the latest refresh. Returns whether it was applied.
    pub fn finish_refresh(&mut self, seq: u64, result: ImageListResult) -> bool {
        if seq != self.refresh_seq {
            return false;
        }
        self.loading = false;
        self.result = Some(result);
        true
    }

    /// Files currently displayed; empty until the first resolution lands.
    pub fn files(&self) -> &[String] {
        match &self.result {
            Some(result) => &result.files,
            None => &[],
        }
    }

    pub fn status_message(&self) -> String {
        match (&self.result, self.loading) {
            (Some(result), false) => status_message(result),
            _ => LOADING_MESSAGE.to_owned(),
        }
    }
}

/// Status line for a resolved list: a count, or guidance when it is empty.
pub fn status_message(result: &ImageListResult) -> String {
    if !result.files.is_empty() {
        return result.count_label();
    }
    if result.using_file_protocol {
        return FILE_PROTOCOL_MESSAGE.to_owned();
    }
    if result.source == ImageSource::Fallback && result.error.is_some() {
        return MANIFEST_UNAVAILABLE_MESSAGE.to_owned();
    }
    EMPTY_MANIFEST_MESSAGE.to_owned()
}
