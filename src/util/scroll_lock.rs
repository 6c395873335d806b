//! Body scroll lock while the viewer overlay is open.
//!
//! Sets `overflow` on `<body>`. Requires a browser environment; native
//! builds no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Hide body overflow so the page behind the overlay does not scroll.
pub fn lock() {
    set_body_overflow("hidden");
}

/// Restore the stylesheet's body overflow.
pub fn unlock() {
    set_body_overflow("");
}

fn set_body_overflow(value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(err) = body.style().set_property("overflow", value) {
            log::debug!("body overflow update failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}
