//! Gallery page: resolves the image list and drives the viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Runs manifest resolution on mount and on Refresh, opens
//! the viewer from card clicks, and closes it on Escape.

use leptos::prelude::*;

use crate::components::image_grid::ImageGrid;
use crate::components::toolbar::Toolbar;
use crate::components::viewer_overlay::ViewerOverlay;
use crate::config::GalleryConfig;
use crate::net::api;
use crate::net::manifest::load_image_list;
use crate::state::gallery::GalleryState;
use crate::state::viewer::{ViewerImage, ViewerState};
use crate::util::environment::PageEnvironment;
use crate::util::scroll_lock;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let config = expect_context::<GalleryConfig>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let viewer = expect_context::<RwSignal<ViewerState>>();

    let on_refresh = Callback::new({
        let config = config.clone();
        move |()| refresh_gallery(config.clone(), gallery)
    });
    let on_open = Callback::new(move |image: ViewerImage| open_viewer(viewer, image));
    let on_close = Callback::new(move |()| close_viewer(viewer));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && viewer.with_untracked(ViewerState::is_open) {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || on_refresh.run(()));

    view! {
        <div class="gallery-page">
            <Toolbar title=config.title on_refresh=on_refresh/>
            <ImageGrid on_open=on_open/>
            <ViewerOverlay on_close=on_close/>
        </div>
    }
}

fn refresh_gallery(config: GalleryConfig, gallery: RwSignal<GalleryState>) {
    let mut seq = 0;
    gallery.update(|g| seq = g.begin_refresh());

    leptos::task::spawn_local(async move {
        let env = PageEnvironment::detect(&config);
        let result = load_image_list(&config, &env, api::fetch_manifest).await;
        gallery.update(|g| {
            if !g.finish_refresh(seq, result) {
                log::debug!("discarding superseded gallery refresh {seq}");
            }
        });
    });
}

fn open_viewer(viewer: RwSignal<ViewerState>, image: ViewerImage) {
    let src = image.src.clone();
    let mut seq = 0;
    viewer.update(|v| seq = v.open(image));
    scroll_lock::lock();

    leptos::task::spawn_local(async move {
        let bytes = api::fetch_content_length(&src).await;
        viewer.update(|v| {
            if !v.apply_size(seq, bytes) {
                log::debug!("dropping stale size for {src}");
            }
        });
    });
}

fn close_viewer(viewer: RwSignal<ViewerState>) {
    viewer.update(ViewerState::close);
    scroll_lock::unlock();
}
