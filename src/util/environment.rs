//! Page environment detection.
//!
//! Reads `location.protocol` and the optional inline manifest global from
//! `window`. Requires a browser environment; native builds report an
//! `http`-style page with no inline list.
//!
//! TRADE-OFFS
//! ==========
//! Inline entries that are neither strings, numbers, nor booleans are
//! skipped rather than stringified; none of them could pass the image
//! extension filter anyway.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

use crate::config::GalleryConfig;

/// Facts about the hosting page that steer manifest resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageEnvironment {
    /// Page was opened from disk (`file:`).
    pub using_file_protocol: bool,
    /// Raw inline file list, unfiltered. `None` when the global is absent or not an array.
    pub inline_files: Option<Vec<String>>,
}

impl PageEnvironment {
    /// Inspect the current window.
    pub fn detect(config: &GalleryConfig) -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let using_file_protocol = window
                .location()
                .protocol()
                .map_or(false, |protocol| is_file_protocol(&protocol));
            let inline_files = read_inline_files(&window, &config.inline_global);
            Self { using_file_protocol, inline_files }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = config;
            Self::default()
        }
    }
}

/// True for the `file:` scheme, compared case-insensitively.
pub fn is_file_protocol(protocol: &str) -> bool {
    protocol.eq_ignore_ascii_case("file:")
}

#[cfg(feature = "csr")]
fn read_inline_files(window: &web_sys::Window, global: &str) -> Option<Vec<String>> {
    let value = js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str(global)).ok()?;
    if !js_sys::Array::is_array(&value) {
        return None;
    }
    let entries = js_sys::Array::from(&value)
        .iter()
        .filter_map(|entry| {
            entry
                .as_string()
                .or_else(|| entry.as_f64().map(|n| n.to_string()))
                .or_else(|| entry.as_bool().map(|b| b.to_string()))
        })
        .collect();
    Some(entries)
}
