//! Settings Page
//!
//! General preferences (dark mode) and the lease generation form, which
//! drives the slowest simulated external action in the app.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smartlease_core::messaging::{LeaseTemplate, LEASE_TEMPLATES};

use crate::components::use_toasts;
use crate::services;
use crate::store::{store_toggle_dark_mode, use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="page">
            <header class="page-header">
                <div>
                    <h2>"App Settings"</h2>
                    <p class="page-subtitle">
                        "Configure user experience and automate document workflows."
                    </p>
                </div>
            </header>

            <div class="panel">
                <h3 class="panel-title">"General Preferences"</h3>
                <div class="panel-body">
                    <div class="setting-row">
                        <div>
                            <p class="cell-primary">"Dark Mode"</p>
                            <p class="cell-secondary">
                                "Switch between light and dark themes for visual comfort."
                            </p>
                        </div>
                        <button
                            class=move || {
                                if store.dark_mode().get() {
                                    "switch switch-on"
                                } else {
                                    "switch"
                                }
                            }
                            role="switch"
                            on:click=move |_| store_toggle_dark_mode(&store)
                        >
                            <span class="switch-knob"></span>
                        </button>
                    </div>
                    <div class="setting-row setting-disabled">
                        <div>
                            <p class="cell-primary">"API Key Management"</p>
                            <p class="cell-secondary">
                                "Manage external integration credentials (Coming Soon)."
                            </p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="panel">
                <h3 class="panel-title">"Document Workflow Automation"</h3>
                <div class="panel-body">
                    <LeaseForm />
                </div>
            </div>
        </section>
    }
}

/// Lease generation: pick a template, fill in the tenant, and dispatch the
/// document for digital signature through the stubbed backend.
#[component]
fn LeaseForm() -> impl IntoView {
    let toasts = use_toasts();

    let (template, set_template) = signal(LeaseTemplate::Standard);
    let (tenant_name, set_tenant_name) = signal(String::from("Francis Baya"));
    let (tenant_email, set_tenant_email) = signal(String::from("baya@gmail.com"));
    let (processing, set_processing) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }
        set_processing.set(true);
        toasts.info(format!(
            "Generating {} and sending for signature...",
            template.get_untracked().name()
        ));
        spawn_local(async move {
            let result = services::send_lease(
                &tenant_name.get_untracked(),
                &tenant_email.get_untracked(),
                template.get_untracked(),
            )
            .await;
            match result {
                Ok(confirmation) => toasts.success(confirmation),
                Err(err) => toasts.error(format!("Failed to send lease: {err}")),
            }
            set_processing.set(false);
        });
    };

    view! {
        <div class="lease-form">
            <h4 class="lease-title">"Lease Generation"</h4>
            <p class="cell-secondary">
                "Automate the creation, signing, and delivery of lease agreements."
            </p>
            <form class="modal-form" on:submit=submit>
                <label class="field">
                    <span>"1. Select Template"</span>
                    <select
                        prop:value=move || template.get().name().to_string()
                        on:change=move |ev| {
                            set_template.set(LeaseTemplate::from_str(&event_target_value(&ev)))
                        }
                    >
                        {LEASE_TEMPLATES
                            .iter()
                            .map(|tpl| {
                                view! { <option value=tpl.name()>{tpl.name()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"2. Tenant Name"</span>
                        <input
                            type="text"
                            required
                            placeholder="e.g., Alice Johnson"
                            prop:value=move || tenant_name.get()
                            on:input=move |ev| set_tenant_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Tenant Email (For Signing)"</span>
                        <input
                            type="email"
                            required
                            placeholder="e.g., tenant@example.com"
                            prop:value=move || tenant_email.get()
                            on:input=move |ev| set_tenant_email.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <button
                    type="submit"
                    class="btn btn-success btn-block"
                    disabled=move || processing.get()
                >
                    {move || {
                        if processing.get() {
                            "Processing..."
                        } else {
                            "Generate, Sign & Send PDF"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
