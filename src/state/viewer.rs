//! Viewer overlay state.
//!
//! DESIGN
//! ======
//! The size lookup runs after the overlay opens and can finish late. Each
//! open/close bumps `request_seq`; a size result tagged with an older
//! sequence is dropped instead of overwriting the current image's metadata.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::util::format::format_bytes;

/// Image shown in the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerImage {
    pub src: String,
    pub title: String,
}

impl ViewerImage {
    /// Suggested filename for the download link.
    pub fn download_name(&self) -> &str {
        &self.title
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    pub image: Option<ViewerImage>,
    /// Formatted byte size, blank until (and unless) the HEAD request answers.
    pub size_label: String,
    pub request_seq: u64,
}

impl ViewerState {
    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    /// Show `image` and return the sequence its size lookup must carry.
    pub fn open(&mut self, image: ViewerImage) -> u64 {
        self.request_seq += 1;
        self.image = Some(image);
        self.size_label.clear();
        self.request_seq
    }

    pub fn close(&mut self) {
        self.request_seq += 1;
        self.image = None;
        self.size_label.clear();
    }

    /// Apply a size lookup result. Returns `false` when the lookup is stale.
    pub fn apply_size(&mut self, seq: u64, bytes: Option<f64>) -> bool {
        if seq != self.request_seq || self.image.is_none() {
            return false;
        }
        self.size_label = bytes.map(format_bytes).unwrap_or_default();
        true
    }
}
