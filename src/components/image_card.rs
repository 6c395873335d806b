//! Thumbnail card for one gallery image.

use leptos::prelude::*;

use crate::state::viewer::ViewerImage;

/// A clickable thumbnail. The image loads lazily as it scrolls into view.
#[component]
pub fn ImageCard(image: ViewerImage, on_open: Callback<ViewerImage>) -> impl IntoView {
    let src = image.src.clone();
    let title = image.title.clone();
    let alt = title.clone();

    view! {
        <button
            type="button"
            class="image-card"
            on:click=move |_| on_open.run(image.clone())
        >
            <img class="image-card__thumb" src=src alt=alt loading="lazy"/>
            <div class="image-card__footer">
                <div class="image-card__name">{title}</div>
                <div class="image-card__hint">"Click to preview"</div>
            </div>
        </button>
    }
}
