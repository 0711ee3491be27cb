//! Sidebar Component
//!
//! Brand, page navigation, and the signed-in footer with sign out.

use leptos::prelude::*;

use crate::context::{AppContext, PAGES};
use crate::store::{store_clear_session, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let display_name = move || {
        store
            .session()
            .get()
            .map(|s| s.display_name)
            .unwrap_or_default()
    };
    let role = move || {
        store
            .session()
            .get()
            .map(|s| s.role.as_str())
            .unwrap_or_default()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-logo">"SmartLease"</div>
            <nav class="sidebar-nav">
                {PAGES
                    .iter()
                    .map(|&page| {
                        let link_class = move || {
                            if ctx.current_page.get() == page {
                                "sidebar-link active"
                            } else {
                                "sidebar-link"
                            }
                        };
                        view! {
                            <button class=link_class on:click=move |_| ctx.navigate(page)>
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-footer">
                <p class="sidebar-user">{display_name}</p>
                <p class="sidebar-role">{role}</p>
                <button
                    class="sidebar-signout"
                    on:click=move |_| store_clear_session(&store)
                >
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
