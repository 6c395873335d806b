//! # image-gallery
//!
//! Leptos + WASM static image gallery. Resolves a list of image filenames
//! (inline global, `manifest.json`, or a fixed fallback list), renders them
//! as a thumbnail grid, and opens a full-size viewer overlay on click.
//!
//! Browser bindings compile only under the `csr` feature. Resolution,
//! formatting, and view state are plain functions so they test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
