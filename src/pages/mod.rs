//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! Each page owns orchestration (fetches, global listeners) and delegates
//! rendering details to `components`.

pub mod gallery;
