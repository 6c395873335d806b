//! Utility helpers shared across gallery modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod environment;
pub mod format;
pub mod image_files;
pub mod scroll_lock;
pub mod url;
