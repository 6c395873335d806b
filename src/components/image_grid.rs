//! Thumbnail grid and status line.
//!
//! DESIGN
//! ======
//! The grid is rebuilt from the resolved file list on every refresh; there
//! is no pagination, sorting, or virtualization.

#[cfg(test)]
#[path = "image_grid_test.rs"]
mod image_grid_test;

use leptos::prelude::*;

use crate::components::image_card::ImageCard;
use crate::config::GalleryConfig;
use crate::state::gallery::GalleryState;
use crate::state::viewer::ViewerImage;

/// One card per file, in manifest order, pointing into the image folder.
pub fn card_images(config: &GalleryConfig, files: &[String]) -> Vec<ViewerImage> {
    files
        .iter()
        .map(|file| ViewerImage { src: config.image_url(file), title: file.clone() })
        .collect()
}

/// Status line plus the grid of image cards.
#[component]
pub fn ImageGrid(on_open: Callback<ViewerImage>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let config = expect_context::<GalleryConfig>();

    view! {
        <section class="gallery">
            <p class="gallery__status" aria-live="polite">
                {move || gallery.with(GalleryState::status_message)}
            </p>
            <div class="gallery__grid">
                {move || {
                    gallery
                        .with(|g| card_images(&config, g.files()))
                        .into_iter()
                        .map(|image| view! { <ImageCard image=image on_open=on_open/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
