//! Top bar with the gallery title and refresh action.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;

/// Page header. `on_refresh` re-runs manifest resolution.
#[component]
pub fn Toolbar(title: String, on_refresh: Callback<()>) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">{title}</h1>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__refresh"
                class:toolbar__refresh--busy=move || gallery.get().loading
                type="button"
                on:click=move |_| on_refresh.run(())
                title="Reload the image list"
            >
                "Refresh"
            </button>
        </header>
    }
}
