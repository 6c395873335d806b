//! Networking and manifest resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two browser fetches (manifest GET, image HEAD),
//! `manifest` decides which file list the page shows, `types` holds the
//! resolved result and manifest document, and `error` the failure kinds.

pub mod api;
pub mod error;
pub mod manifest;
pub mod types;
