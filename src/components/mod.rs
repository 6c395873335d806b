//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render gallery chrome and the viewer overlay while reading
//! shared state from Leptos context providers. Actions that start fetches
//! are passed in as callbacks from the page.

pub mod image_card;
pub mod image_grid;
pub mod toolbar;
pub mod viewer_overlay;
