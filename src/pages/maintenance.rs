//! Maintenance Page
//!
//! Record manager for maintenance tickets: search, status/issue/unit
//! filters, the priority-sorted ticket table, add/edit modal, and delete
//! confirmation. Ticket numbers are assigned from the record id at
//! creation and never change.

use chrono::NaiveDate;
use leptos::prelude::*;

use smartlease_core::domain::{
    IssueType, MaintenanceTicket, RecordId, TicketStatus, ISSUE_TYPES,
};

use crate::components::{use_toasts, ConfirmDeleteModal, Modal, StatusBadge};
use crate::money::ksh;

/// Field set collected by the ticket form
#[derive(Clone)]
struct TicketForm {
    unit: String,
    issue_type: IssueType,
    description: String,
    status: TicketStatus,
    estimated_cost: u32,
    reported_on: NaiveDate,
}

fn status_tone(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Pending => "warning",
        TicketStatus::InProgress => "info",
        TicketStatus::Done => "success",
    }
}

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let toasts = use_toasts();

    let list = RwSignal::new(MaintenanceTicket::seed_list());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::from("All"));
    let (issue_filter, set_issue_filter) = signal(String::from("All"));
    let (unit_filter, set_unit_filter) = signal(String::from("All"));
    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal(Option::<MaintenanceTicket>::None);
    let (delete_id, set_delete_id) = signal(Option::<RecordId>::None);

    // Unit filter options track the live record set
    let all_units = Memo::new(move |_| {
        list.with(|l| {
            let mut units: Vec<String> =
                l.records().iter().map(|t| t.unit.clone()).collect();
            units.sort();
            units.dedup();
            units
        })
    });

    let filtered = Memo::new(move |_| {
        let query = search.get();
        let status = status_filter.get();
        let issue = issue_filter.get();
        let unit = unit_filter.get();
        list.with(|l| {
            let by_status =
                |t: &MaintenanceTicket| status == "All" || t.status.as_str() == status;
            let by_issue =
                |t: &MaintenanceTicket| issue == "All" || t.issue_type.as_str() == issue;
            let by_unit = |t: &MaintenanceTicket| unit == "All" || t.unit == unit;
            l.view(&query, &[&by_status, &by_issue, &by_unit])
        })
    });

    let open_add = move |_| {
        set_editing.set(None);
        set_modal_open.set(true);
    };

    let on_save = Callback::new(move |form: TicketForm| {
        match editing.get_untracked() {
            Some(existing) => {
                let outcome = list.write().update_with(existing.id, |t| {
                    t.unit = form.unit.clone();
                    t.issue_type = form.issue_type;
                    t.description = form.description.clone();
                    t.status = form.status;
                    t.estimated_cost = form.estimated_cost;
                    // reported_on is read-only once a ticket exists
                });
                match outcome {
                    Ok(updated) => {
                        toasts.success(format!("Ticket {} updated successfully.", updated.ticket))
                    }
                    Err(err) => toasts.error(err.to_string()),
                }
            }
            None => {
                let mut number = String::new();
                list.write().create_with(|id| {
                    let mut ticket = MaintenanceTicket::new(
                        id,
                        form.issue_type,
                        form.description.clone(),
                        form.unit.clone(),
                        form.reported_on,
                    );
                    ticket.status = form.status;
                    ticket.estimated_cost = form.estimated_cost;
                    number = ticket.ticket.clone();
                    ticket
                });
                toasts.success(format!("New maintenance request ({number}) created."));
            }
        }
        set_editing.set(None);
        set_modal_open.set(false);
    });

    let on_delete_confirmed = move |_| {
        if let Some(id) = delete_id.get_untracked() {
            match list.write().delete(id) {
                Ok(removed) => toasts.success(format!(
                    "Ticket {} was successfully deleted.",
                    removed.ticket
                )),
                Err(err) => toasts.error(err.to_string()),
            }
            set_delete_id.set(None);
        }
    };

    view! {
        <section class="page">
            <header class="page-header">
                <div>
                    <h2>"Maintenance Management"</h2>
                    <p class="page-subtitle">
                        "View, filter, and manage all maintenance requests across your properties."
                    </p>
                </div>
                <button class="btn btn-primary" on:click=open_add>
                    "+ New Ticket"
                </button>
            </header>

            <div class="toolbar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search ticket, unit, or description..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || unit_filter.get()
                    on:change=move |ev| set_unit_filter.set(event_target_value(&ev))
                >
                    <option value="All">"All Units"</option>
                    {move || {
                        all_units
                            .get()
                            .into_iter()
                            .map(|unit| {
                                view! { <option value=unit.clone()>{unit.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <select
                    prop:value=move || status_filter.get()
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="All">"All Statuses"</option>
                    <option value="Pending">"Pending"</option>
                    <option value="In Progress">"In Progress"</option>
                    <option value="Done">"Done"</option>
                </select>
                <select
                    prop:value=move || issue_filter.get()
                    on:change=move |ev| set_issue_filter.set(event_target_value(&ev))
                >
                    <option value="All">"All Issues"</option>
                    {ISSUE_TYPES
                        .iter()
                        .map(|issue| {
                            view! { <option value=issue.as_str()>{issue.as_str()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="table-card">
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Ticket #"</th>
                            <th>"Unit"</th>
                            <th>"Issue Type"</th>
                            <th>"Status"</th>
                            <th>"Est. Cost"</th>
                            <th>"Reported"</th>
                            <th class="col-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|ticket: MaintenanceTicket| {
                                    let id = ticket.id;
                                    let edit_ticket = ticket.clone();
                                    view! {
                                        <tr>
                                            <td class="cell-primary">{ticket.ticket.clone()}</td>
                                            <td>{ticket.unit.clone()}</td>
                                            <td>{ticket.issue_type.as_str()}</td>
                                            <td>
                                                <StatusBadge
                                                    label=ticket.status.as_str()
                                                    tone=status_tone(ticket.status)
                                                />
                                            </td>
                                            <td>
                                                {if ticket.estimated_cost > 0 {
                                                    ksh(ticket.estimated_cost as u64)
                                                } else {
                                                    "TBD".to_string()
                                                }}
                                            </td>
                                            <td class="cell-secondary">
                                                {ticket.reported_on.to_string()}
                                            </td>
                                            <td class="col-right">
                                                <button
                                                    class="icon-btn"
                                                    title="Edit Status/Cost"
                                                    on:click=move |_| {
                                                        set_editing.set(Some(edit_ticket.clone()));
                                                        set_modal_open.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="icon-btn icon-danger"
                                                    title="Delete Ticket"
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
                                    <p class="cell-primary">
                                        "No maintenance tickets found matching your criteria."
                                    </p>
                                    <p>"Try adjusting your filters or create a new ticket."</p>
                                </div>
                            }
                        })
                }}
            </div>

            {move || {
                delete_id
                    .get()
                    .map(|_| {
                        view! {
                            <ConfirmDeleteModal
                                message="Are you sure you want to permanently delete this ticket from the system? This action cannot be undone."
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
                            <TicketModal
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

/// Create/edit form, seeded fresh on every open. The reported date
/// defaults to today for new tickets and is read-only when editing.
#[component]
fn TicketModal(
    editing: Option<MaintenanceTicket>,
    #[prop(into)] on_save: Callback<TicketForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_editing = editing.is_some();
    let title = if is_editing {
        "Edit Maintenance Ticket"
    } else {
        "Create New Request"
    };

    let today = chrono::Utc::now().date_naive();
    let (unit, set_unit) = signal(
        editing.as_ref().map(|t| t.unit.clone()).unwrap_or_default(),
    );
    let (issue_type, set_issue_type) = signal(
        editing.as_ref().map(|t| t.issue_type).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        editing.as_ref().map(|t| t.description.clone()).unwrap_or_default(),
    );
    let (status, set_status) = signal(
        editing.as_ref().map(|t| t.status).unwrap_or_default(),
    );
    let (cost, set_cost) = signal(
        editing
            .as_ref()
            .map(|t| t.estimated_cost.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (reported, set_reported) = signal(
        editing
            .as_ref()
            .map(|t| t.reported_on)
            .unwrap_or(today)
            .to_string(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(TicketForm {
            unit: unit.get_untracked(),
            issue_type: issue_type.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
            estimated_cost: cost.get_untracked().parse().unwrap_or(0),
            reported_on: reported.get_untracked().parse().unwrap_or(today),
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label class="field">
                    <span>"Unit / Property"</span>
                    <input
                        type="text"
                        required
                        placeholder="e.g., Sunrise Apts - A4"
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Issue Type"</span>
                        <select
                            prop:value=move || issue_type.get().as_str().to_string()
                            on:change=move |ev| {
                                set_issue_type.set(IssueType::from_str(&event_target_value(&ev)))
                            }
                        >
                            {ISSUE_TYPES
                                .iter()
                                .map(|issue| {
                                    view! {
                                        <option value=issue.as_str()>{issue.as_str()}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="field">
                        <span>"Date Reported"</span>
                        <input
                            type="date"
                            required
                            readonly=is_editing
                            prop:value=move || reported.get()
                            on:input=move |ev| set_reported.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="field-row">
                    <label class="field">
                        <span>"Current Status"</span>
                        <select
                            prop:value=move || status.get().as_str().to_string()
                            on:change=move |ev| {
                                set_status.set(TicketStatus::from_str(&event_target_value(&ev)))
                            }
                        >
                            <option value="Pending">"Pending"</option>
                            <option value="In Progress">"In Progress"</option>
                            <option value="Done">"Done"</option>
                        </select>
                    </label>
                    <label class="field">
                        <span>"Est. Cost (Ksh)"</span>
                        <input
                            type="number"
                            min="0"
                            step="1"
                            prop:value=move || cost.get()
                            on:input=move |ev| set_cost.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field">
                    <span>"Detailed Description"</span>
                    <textarea
                        required
                        rows="3"
                        placeholder="What exactly is the problem?"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="btn btn-primary btn-block">
                    {if is_editing { "Update Ticket" } else { "Create Request" }}
                </button>
            </form>
        </Modal>
    }
}
