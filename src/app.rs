//! Root application component and browser entry point.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::GalleryConfig;
use crate::pages::gallery::GalleryPage;
use crate::state::gallery::GalleryState;
use crate::state::viewer::ViewerState;

/// Root application component.
///
/// Provides the configuration and shared state contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GalleryConfig::default();
    let title = config.title.clone();

    provide_context(config);
    provide_context(RwSignal::new(GalleryState::default()));
    provide_context(RwSignal::new(ViewerState::default()));

    view! {
        <Title text=title/>
        <GalleryPage/>
    }
}

/// Install panic/log hooks and mount [`App`] into `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting gallery");
    leptos::mount::mount_to_body(App);
}
