//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Record lists
//! stay page-local; only session and theme state live here.

use leptos::prelude::*;
use reactive_stores::Store;
use smartlease_core::auth::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user; None while the auth screens are showing
    pub session: Option<Session>,
    /// Dark theme flag, mirrored onto the document root as a CSS class
    pub dark_mode: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install the session after a successful sign-in or sign-up
pub fn store_set_session(store: &AppStore, session: Session) {
    *store.session().write() = Some(session);
}

/// Drop the session on sign-out
pub fn store_clear_session(store: &AppStore) {
    *store.session().write() = None;
}

/// Flip dark mode and mirror the flag onto the document root
pub fn store_toggle_dark_mode(store: &AppStore) {
    let next = !store.dark_mode().get_untracked();
    store.dark_mode().set(next);
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", next);
    }
}
