//! Full-size image overlay with download link and size line.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;

/// Fullscreen viewer. Clicking the backdrop or the close button calls
/// `on_close`; clicks inside the panel do not.
#[component]
pub fn ViewerOverlay(on_close: Callback<()>) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    let src = move || viewer.with(|v| v.image.as_ref().map(|i| i.src.clone()).unwrap_or_default());
    let title = move || viewer.with(|v| v.image.as_ref().map(|i| i.title.clone()).unwrap_or_default());
    let download = move || {
        viewer.with(|v| {
            v.image
                .as_ref()
                .map(|i| i.download_name().to_owned())
                .unwrap_or_default()
        })
    };
    let size = move || viewer.with(|v| v.size_label.clone());

    view! {
        <Show when=move || viewer.with(ViewerState::is_open)>
            <div class="viewer" role="dialog" aria-modal="true" on:click=move |_| on_close.run(())>
                <div class="viewer__panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="viewer__header">
                        <div class="viewer__heading">
                            <h2 class="viewer__title">{title}</h2>
                            <span class="viewer__meta">{size}</span>
                        </div>
                        <a class="btn viewer__download" href=src download=download>
                            "Download"
                        </a>
                        <button
                            class="btn viewer__close"
                            type="button"
                            on:click=move |_| on_close.run(())
                            title="Close viewer"
                            aria-label="Close viewer"
                        >
                            "✕"
                        </button>
                    </div>
                    <img class="viewer__image" src=src alt=title/>
                </div>
            </div>
        </Show>
    }
}
