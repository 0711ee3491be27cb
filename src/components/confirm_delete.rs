//! Delete Confirmation Modal
//!
//! Deleting takes two explicit actions: the page records the target id
//! when the delete button is clicked, and only the confirm button here
//! performs the removal. Cancel returns to idle with the list untouched.

use leptos::prelude::*;

/// Confirmation dialog shown while a delete is pending
#[component]
pub fn ConfirmDeleteModal(
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal-panel modal-panel-sm">
                <h4 class="confirm-title">"Confirm Deletion"</h4>
                <p class="confirm-text">{message}</p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
