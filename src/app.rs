//! SmartLease Frontend App
//!
//! Root component: provides the store, navigation, toast slot, and
//! identity service, then gates the dashboard shell behind a session.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NoticeBanner, Sidebar, Toasts};
use crate::context::{AppContext, Page};
use crate::pages::{
    AuthScreen, DashboardPage, MaintenancePage, PaymentsPage, PropertiesPage, SettingsPage,
    TenantsPage,
};
use crate::services::AuthService;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let (current_page, set_current_page) = signal(Page::Dashboard);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((current_page, set_current_page)));
    provide_context(AuthService::new());
    provide_context(Toasts::new());

    let signed_in = move || store.session().get().is_some();

    view! {
        <Show when=signed_in fallback=|| view! { <AuthScreen /> }>
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <NoticeBanner />
                    {move || match current_page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Tenants => view! { <TenantsPage /> }.into_any(),
                        Page::Properties => view! { <PropertiesPage /> }.into_any(),
                        Page::Payments => view! { <PaymentsPage /> }.into_any(),
                        Page::Maintenance => view! { <MaintenancePage /> }.into_any(),
                        Page::Settings => view! { <SettingsPage /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
