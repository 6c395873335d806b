//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery` list, `viewer` overlay) so each
//! component depends on a small focused model provided through context.

pub mod gallery;
pub mod viewer;
