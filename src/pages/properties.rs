//! Properties Page
//!
//! Record manager for properties, rendered as a card grid: search, status
//! filter, add/edit modal, and delete confirmation. The occupancy
//! invariant (occupied <= total) is checked inline in the form and again
//! by the domain layer before anything is committed.

use leptos::prelude::*;

use smartlease_core::domain::{Property, PropertyStatus, RecordId, PROPERTY_STATUSES};

use crate::components::{use_toasts, ConfirmDeleteModal, Modal, StatusBadge};

/// Field set collected by the property form
#[derive(Clone)]
struct PropertyForm {
    name: String,
    location: String,
    total_units: u32,
    occupied_units: u32,
    status: PropertyStatus,
}

fn status_tone(status: PropertyStatus) -> &'static str {
    match status {
        PropertyStatus::Active => "success",
        PropertyStatus::Maintenance => "warning",
        PropertyStatus::Upcoming => "info",
        PropertyStatus::Archived => "muted",
    }
}

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let toasts = use_toasts();

    let list = RwSignal::new(Property::seed_list());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::from("All"));
    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(Option::<Property>::None);
    let (delete_id, set_delete_id) = signal(Option::<RecordId>::None);

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let filter = status_filter.get();
        list.with(|l| {
            let by_status =
                |p: &Property| filter == "All" || p.status.as_str() == filter;
            l.view(&query, &[&by_status])
        })
    });

    let open_add = move |_| {
        set_editing.set(None);
        set_modal_open.set(true);
    };

    let on_save = Callback::new(move |form: PropertyForm| {
        // Occupancy was already checked in the form; the constructor
        // enforces it again before anything is committed
        let candidate = match Property::new(
            0,
            form.name,
            form.location,
            form.total_units,
            form.occupied_units,
            form.status,
        ) {
            Ok(property) => property,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };
        match editing.get_untracked() {
            Some(existing) => {
                let outcome = list.write().update_with(existing.id, |p| {
                    *p = Property {
                        id: p.id,
                        ..candidate.clone()
                    };
                });
                match outcome {
                    Ok(updated) => {
                        toasts.success(format!("Property {} updated.", updated.name))
                    }
                    Err(err) => toasts.error(err.to_string()),
                }
            }
            None => {
                let id = list.write().create_with(|id| Property { id, ..candidate });
                toasts.success(format!("Property added (ID {id})."));
            }
        }
        set_editing.set(None);
        set_modal_open.set(false);
    });

    let on_delete_confirmed = move |_| {
        if let Some(id) = delete_id.get_untracked() {
            match list.write().delete(id) {
                Ok(removed) => {
                    toasts.success(format!("Property {} deleted.", removed.name))
                }
                Err(err) => toasts.error(err.to_string()),
            }
            set_delete_id.set(None);
        }
    };

    view! {
        <section class="page">
            <header class="page-header">
                <div>
                    <h2>"Properties"</h2>
                    <p class="page-subtitle">"Manage all your properties and their details."</p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ Add New Property"
                </button>
            </header>

            <div class="toolbar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search by name or location..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <label class="toolbar-filter">
                    <span>"Filter by Status:"</span>
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value="All">"All Statuses"</option>
                        {PROPERTY_STATUSES
                            .iter()
                            .map(|s| {
                                view! { <option value=s.as_str()>{s.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <div class="card-grid">
                {move || {
                    let properties = filtered.get();
                    if properties.is_empty() {
                        view! {
                            <div class="empty-state card-grid-span">
                                "No properties found matching your criteria."
                            </div>
                        }
                            .into_any()
                    } else {
                        properties
                            .into_iter()
                            .map(|property: Property| {
                                let id = property.id;
                                let edit_property = property.clone();
                                view! {
                                    <div class="property-card">
                                        <div class="property-card-head">
                                            <h3>{property.name.clone()}</h3>
                                            <StatusBadge
                                                label=property.status.as_str()
                                                tone=status_tone(property.status)
                                            />
                                        </div>
                                        <p class="property-location">{property.location.clone()}</p>
                                        <div class="property-stats">
                                            <span>"Total Units: " <strong>{property.total_units}</strong></span>
                                            <span>"Occupied: " <strong>{property.occupied_units}</strong></span>
                                            <span>"Vacant: " <strong>{property.vacant_units()}</strong></span>
                                        </div>
                                        <div class="property-card-actions">
                                            <button
                                                class="icon-btn"
                                                title="Edit Property"
                                                on:click=move |_| {
                                                    set_editing.set(Some(edit_property.clone()));
                                                    set_modal_open.set(true);
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="icon-btn icon-danger"
                                                title="Delete Property"
                                                on:click=move |_| set_delete_id.set(Some(id))
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            {move || {
                delete_id
                    .get()
                    .map(|_| {
                        view! {
                            <ConfirmDeleteModal
                                message="Are you sure you want to delete this property? This action cannot be undone."
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
                            <PropertyModal
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

/// Create/edit form, seeded fresh on every open. Submitting with more
/// occupied than total units shows an inline error and commits nothing.
#[component]
fn PropertyModal(
    editing: Option<Property>,
    #[prop(into)] on_save: Callback<PropertyForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_editing = editing.is_some();
    let title = if is_editing {
        "Edit Property Details"
    } else {
        "Add New Property"
    };

    let (name, set_name) = signal(
        editing.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (location, set_location) = signal(
        editing.as_ref().map(|p| p.location.clone()).unwrap_or_default(),
    );
    let (total_units, set_total_units) = signal(
        editing.as_ref().map(|p| p.total_units.to_string()).unwrap_or_default(),
    );
    let (occupied_units, set_occupied_units) = signal(
        editing
            .as_ref()
            .map(|p| p.occupied_units.to_string())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(
        editing.as_ref().map(|p| p.status).unwrap_or_default(),
    );
    let (error, set_error) = signal(Option::<String>::None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let total = total_units.get_untracked().parse::<u32>().unwrap_or(0);
        let occupied = occupied_units.get_untracked().parse::<u32>().unwrap_or(0);
        if occupied > total {
            set_error.set(Some(format!(
                "Occupied units ({occupied}) cannot exceed total units ({total})."
            )));
            return;
        }
        on_save.run(PropertyForm {
            name: name.get_untracked(),
            location: location.get_untracked(),
            total_units: total,
            occupied_units: occupied,
            status: status.get_untracked(),
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label class="field">
                    <span>"Property Name"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Location"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Total Units"</span>
                        <input
                            type="number"
                            required
                            min="0"
                            prop:value=move || total_units.get()
                            on:input=move |ev| set_total_units.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Occupied Units"</span>
                        <input
                            type="number"
                            required
                            min="0"
                            prop:value=move || occupied_units.get()
                            on:input=move |ev| set_occupied_units.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field">
                    <span>"Status"</span>
                    <select
                        prop:value=move || status.get().as_str().to_string()
                        on:change=move |ev| {
                            set_status.set(PropertyStatus::from_str(&event_target_value(&ev)))
                        }
                    >
                        {PROPERTY_STATUSES
                            .iter()
                            .map(|s| {
                                view! { <option value=s.as_str()>{s.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {if is_editing { "Save Changes" } else { "Add Property" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
