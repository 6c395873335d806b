//! Gallery configuration.
//!
//! DESIGN
//! ======
//! Folder, fallback list, and inline-global name are carried in an explicit
//! value handed to the resolver and provided to components via context,
//! instead of module-level constants read from everywhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::url::join_url;

/// Relative folder holding the gallery images.
pub const DEFAULT_IMAGE_FOLDER: &str = "./images";

/// Manifest file name inside the image folder.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Window global a generated `manifest.js` assigns the file list to.
pub const DEFAULT_INLINE_GLOBAL: &str = "__IMAGE_MANIFEST_FILES__";

pub const DEFAULT_TITLE: &str = "Image Gallery";

/// Runtime configuration for one gallery page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub image_folder: String,
    /// Used when the manifest cannot be loaded. Filtered like any other source.
    pub fallback_files: Vec<String>,
    pub inline_global: String,
    pub title: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_folder: DEFAULT_IMAGE_FOLDER.to_owned(),
            fallback_files: Vec::new(),
            inline_global: DEFAULT_INLINE_GLOBAL.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl GalleryConfig {
    /// URL of the JSON manifest, `<folder>/manifest.json`.
    pub fn manifest_url(&self) -> String {
        join_url(&self.image_folder, MANIFEST_FILE_NAME)
    }

    /// URL of one image inside the configured folder.
    pub fn image_url(&self, file: &str) -> String {
        join_url(&self.image_folder, file)
    }
}
