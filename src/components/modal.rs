//! Modal Component
//!
//! Overlay plus panel wrapper shared by the create/edit forms.

use leptos::prelude::*;

/// Modal dialog with a titled header and close button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal-panel">
                <header class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
