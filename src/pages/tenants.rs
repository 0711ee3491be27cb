//! Tenants Page
//!
//! Record manager for tenants: search, rent-status filter, add/edit modal,
//! delete confirmation, and per-row reminder quick actions through the
//! messaging service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smartlease_core::domain::{LeaseStatus, RecordId, RentStatus, Tenant};
use smartlease_core::messaging::ReminderKind;

use crate::components::{use_toasts, ConfirmDeleteModal, Modal, StatusBadge};
use crate::money::ksh;
use crate::services;

/// Field set collected by the tenant form
#[derive(Clone)]
struct TenantForm {
    name: String,
    unit: String,
    contact: String,
    balance: RentStatus,
    status: LeaseStatus,
}

#[component]
pub fn TenantsPage() -> impl IntoView {
    let toasts = use_toasts();

    let list = RwSignal::new(Tenant::seed_list());
    let (search, set_search) = signal(String::new());
    let (rent_filter, set_rent_filter) = signal(String::from("All"));
    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(Option::<Tenant>::None);
    let (delete_id, set_delete_id) = signal(Option::<RecordId>::None);

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let filter = rent_filter.get();
        list.with(|l| {
            let by_rent_status =
                |t: &Tenant| filter == "All" || t.balance.as_str() == filter;
            l.view(&query, &[&by_rent_status])
        })
    });

    let open_add = move |_| {
        set_editing.set(None);
        set_modal_open.set(true);
    };

    let on_save = Callback::new(move |form: TenantForm| {
        match editing.get_untracked() {
            Some(existing) => {
                let outcome = list.write().update_with(existing.id, |t| {
                    t.name = form.name.clone();
                    t.unit = form.unit.clone();
                    t.contact = form.contact.clone();
                    t.balance = form.balance;
                    t.status = form.status;
                });
                match outcome {
                    Ok(updated) => toasts.success(format!("Tenant {} updated.", updated.name)),
                    Err(err) => toasts.error(err.to_string()),
                }
            }
            None => {
                let id = list.write().create_with(|id| {
                    let mut tenant = Tenant::new(id, form.name, form.unit, form.contact);
                    tenant.balance = form.balance;
                    tenant.status = form.status;
                    tenant
                });
                toasts.success(format!("Tenant added (ID {id})."));
            }
        }
        set_editing.set(None);
        set_modal_open.set(false);
    });

    let on_delete_confirmed = move |_| {
        if let Some(id) = delete_id.get_untracked() {
            match list.write().delete(id) {
                Ok(_) => toasts.success(format!("Tenant ID {id} successfully deleted.")),
                Err(err) => toasts.error(err.to_string()),
            }
            set_delete_id.set(None);
        }
    };

    let send_reminder = move |tenant: Tenant, kind: ReminderKind| {
        toasts.info(format!(
            "Sending {} reminder to {}...",
            kind.label(),
            tenant.name
        ));
        spawn_local(async move {
            let result =
                services::send_reminder(&tenant.contact, &tenant.name, &tenant.unit, kind).await;
            match result {
                Ok(confirmation) => toasts.success(confirmation),
                Err(err) => toasts.error(format!("Failed to send message: {err}")),
            }
        });
    };

    view! {
        <section class="page">
            <header class="page-header">
                <div>
                    <h2>"Tenants"</h2>
                    <p class="page-subtitle">"Manage your tenants and lease details"</p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Add New Tenant"
                </button>
            </header>

            <div class="toolbar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search by name, property or unit..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <label class="toolbar-filter">
                    <span>"Filter by Rent Status:"</span>
                    <select
                        prop:value=move || rent_filter.get()
                        on:change=move |ev| set_rent_filter.set(event_target_value(&ev))
                    >
                        <option value="All">"All Statuses"</option>
                        <option value="Paid">"Paid"</option>
                        <option value="Not Paid">"Not Paid"</option>
                    </select>
                </label>
            </div>

            <div class="table-card">
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Tenant Name"</th>
                            <th>"Property / Unit"</th>
                            <th>"Contact"</th>
                            <th>"Rent"</th>
                            <th>"Rent Status"</th>
                            <th>"Quick Actions"</th>
                            <th class="col-right">"Admin"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|tenant: Tenant| {
                                    let id = tenant.id;
                                    let edit_tenant = tenant.clone();
                                    let primary_tenant = tenant.clone();
                                    let received_tenant = tenant.clone();
                                    let badge_tone = match tenant.balance {
                                        RentStatus::Paid => "success",
                                        RentStatus::NotPaid => "danger",
                                    };
                                    let primary_kind = match tenant.balance {
                                        RentStatus::Paid => ReminderKind::RentDue,
                                        RentStatus::NotPaid => ReminderKind::RentLate,
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="cell-primary">{tenant.name.clone()}</div>
                                                <div class="cell-secondary">"ID: " {id}</div>
                                            </td>
                                            <td>{tenant.unit.clone()}</td>
                                            <td>{tenant.contact.clone()}</td>
                                            <td class="cell-amount">{ksh(tenant.rent_due as u64)}</td>
                                            <td>
                                                <StatusBadge
                                                    label=tenant.balance.as_str()
                                                    tone=badge_tone
                                                />
                                            </td>
                                            <td>
                                                <div class="quick-actions">
                                                    <button
                                                        class="action-btn"
                                                        title=format!("Send {} Reminder", primary_kind.label())
                                                        on:click=move |_| send_reminder(
                                                            primary_tenant.clone(),
                                                            primary_kind,
                                                        )
                                                    >
                                                        {match primary_kind {
                                                            ReminderKind::RentLate => "Late",
                                                            _ => "Due",
                                                        }}
                                                    </button>
                                                    <button
                                                        class="action-btn action-success"
                                                        title="Send Rent Received Confirmation"
                                                        on:click=move |_| send_reminder(
                                                            received_tenant.clone(),
                                                            ReminderKind::RentReceived,
                                                        )
                                                    >
                                                        "Paid"
                                                    </button>
                                                </div>
                                            </td>
                                            <td class="col-right">
                                                <button
                                                    class="icon-btn"
                                                    title="Edit Tenant"
                                                    on:click=move |_| {
                                                        set_editing.set(Some(edit_tenant.clone()));
                                                        set_modal_open.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="icon-btn icon-danger"
                                                    title="Delete Tenant"
                                                    on:click=move |_| set_delete_id.set(Some(id))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                {move || {
                    filtered
                        .get()
                        .is_empty()
                        .then(|| {
                            view! {
                                <div class="empty-state">
                                    "No tenants found matching your search and filter criteria."
                                </div>
                            }
                        })
                }}
            </div>

            {move || {
                delete_id
                    .get()
                    .map(|id| {
                        view! {
                            <ConfirmDeleteModal
                                message=format!(
                                    "Are you sure you want to delete tenant ID: {id}? This action cannot be undone.",
                                )
                                on_confirm=on_delete_confirmed
                                on_cancel=move |_| set_delete_id.set(None)
                            />
                        }
                    })
            }}

            {move || {
                modal_open
                    .get()
                    .then(|| {
                        view! {
                            <TenantModal
                                editing=editing.get()
                                on_save=on_save
                                on_close=move |_| set_modal_open.set(false)
                            />
                        }
                    })
            }}
        </section>
    }
}

/// Create/edit form. Mounted fresh each time it opens, so the fields are
/// always seeded from the record being edited (or empty defaults), never
/// from a previous edit.
#[component]
fn TenantModal(
    editing: Option<Tenant>,
    #[prop(into)] on_save: Callback<TenantForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_editing = editing.is_some();
    let title = if is_editing {
        "Edit Tenant Details"
    } else {
        "Add New Tenant"
    };

    let seed = editing.unwrap_or_else(|| {
        Tenant::new(0, String::new(), String::new(), String::new())
    });
    let (name, set_name) = signal(seed.name.clone());
    let (unit, set_unit) = signal(seed.unit.clone());
    let (contact, set_contact) = signal(seed.contact.clone());
    let (balance, set_balance) = signal(seed.balance);
    let (status, set_status) = signal(seed.status);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(TenantForm {
            name: name.get_untracked(),
            unit: unit.get_untracked(),
            contact: contact.get_untracked(),
            balance: balance.get_untracked(),
            status: status.get_untracked(),
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label class="field">
                    <span>"Tenant Name"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Unit"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Contact"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || contact.get()
                        on:input=move |ev| set_contact.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Rent Payment Status"</span>
                    <select
                        prop:value=move || balance.get().as_str().to_string()
                        on:change=move |ev| {
                            set_balance.set(RentStatus::from_str(&event_target_value(&ev)))
                        }
                    >
                        <option value="Paid">"Paid"</option>
                        <option value="Not Paid">"Not Paid"</option>
                    </select>
                </label>
                <label class="field">
                    <span>"Lease Status"</span>
                    <select
                        prop:value=move || status.get().as_str().to_string()
                        on:change=move |ev| {
                            set_status.set(LeaseStatus::from_str(&event_target_value(&ev)))
                        }
                    >
                        <option value="Active">"Active"</option>
                        <option value="Inactive">"Inactive"</option>
                    </select>
                </label>
                <button type="submit" class="btn btn-primary btn-block">
                    {if is_editing { "Update Tenant" } else { "Add Tenant" }}
                </button>
            </form>
        </Modal>
    }
}
