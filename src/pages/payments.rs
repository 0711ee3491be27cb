//! Payments Page
//!
//! Financial overview: collection metrics, the monthly report CSV export,
//! tenant balances with reminder actions, the payment history (newest
//! first), and a record-payment modal.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use smartlease_core::csv::ExportError;
use smartlease_core::domain::{
    Payment, PaymentKind, PaymentMode, PaymentStatus, TenantBalance,
};
use smartlease_core::messaging::ReminderKind;

use crate::components::{use_toasts, Modal, StatusBadge};
use crate::money::ksh;
use crate::services;

/// Reporting month the seeded books are closed around
const CURRENT_MONTH: &str = "2025-11";

/// Month options offered by the report dropdown, newest first
const REPORT_MONTHS: &[(&str, &str)] = &[
    ("2025-11", "November 2025"),
    ("2025-10", "October 2025"),
];

fn month_label(key: &str) -> &'static str {
    REPORT_MONTHS
        .iter()
        .find(|(value, _)| *value == key)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

/// Field set collected by the record-payment form
#[derive(Clone)]
struct PaymentForm {
    unit: String,
    tenant: String,
    amount: u32,
    date: NaiveDate,
    kind: PaymentKind,
    mode: PaymentMode,
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let toasts = use_toasts();

    let list = RwSignal::new(Payment::seed_list());
    let balances = RwSignal::new(TenantBalance::seed());
    let (report_month, set_report_month) = signal(String::from(CURRENT_MONTH));
    let (modal_open, set_modal_open) = signal(false);

    // Newest-first projection of the whole history
    let history = Memo::new(move |_| list.with(|l| l.view("", &[])));

    let collected_this_month = Memo::new(move |_| {
        list.with(|l| {
            l.records()
                .iter()
                .filter(|p| {
                    p.status == PaymentStatus::Completed && p.month_key() == CURRENT_MONTH
                })
                .map(|p| p.amount as u64)
                .sum::<u64>()
        })
    });

    let pending_balances =
        Memo::new(move |_| balances.with(|rows| TenantBalance::total_outstanding(rows)));

    // Completed payments for the selected report month, in view order
    let report_rows = Memo::new(move |_| {
        let month = report_month.get();
        list.with(|l| {
            let completed = |p: &Payment| p.status == PaymentStatus::Completed;
            let in_month = |p: &Payment| p.month_key() == month;
            l.view("", &[&completed, &in_month])
        })
    });

    let export_report = move |_| {
        let month = report_month.get_untracked();
        let filename = format!("Rent_Report_{}.csv", month_label(&month).replace(' ', "_"));
        let rows = report_rows.get_untracked();
        match services::download_csv(&rows, &filename) {
            Ok(()) => toasts.success(format!(
                "Exported {} transactions for {}.",
                rows.len(),
                month_label(&month)
            )),
            Err(ExportError::EmptyDataset) => {
                toasts.error("No completed payments found for the selected month.")
            }
        }
    };

    let send_balance_reminder = move |row: TenantBalance| {
        toasts.info(format!("Sending Rent Due reminder to {}...", row.name));
        spawn_local(async move {
            let result =
                services::send_reminder(&row.name, &row.name, &row.unit, ReminderKind::RentDue)
                    .await;
            match result {
                Ok(confirmation) => toasts.success(confirmation),
                Err(err) => toasts.error(format!("Failed to send message: {err}")),
            }
        });
    };

    let on_save = Callback::new(move |form: PaymentForm| {
        let id = list.write().create_with(|id| Payment {
            id,
            unit: form.unit,
            tenant: form.tenant,
            amount: form.amount,
            date: form.date,
            kind: form.kind,
            status: PaymentStatus::Completed,
            mode: form.mode,
        });
        toasts.success(format!("Payment recorded (ID {id})."));
        set_modal_open.set(false);
    });

    view! {
        <section class="page">
            <header class="page-header">
                <div>
                    <h2>"Financial Overview"</h2>
                    <p class="page-subtitle">"Manage tenant balances and track monthly income."</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_modal_open.set(true)>
                    "+ Record Payment"
                </button>
            </header>

            <div class="stat-grid">
                <div class="stat-card">
                    <p class="stat-title">"Rent Collected (November)"</p>
                    <h3 class="stat-value">{move || ksh(collected_this_month.get())}</h3>
                </div>
                <div class="stat-card">
                    <p class="stat-title">"Pending Balances"</p>
                    <h3 class="stat-value">
                        {move || ksh(pending_balances.get().max(0) as u64)}
                    </h3>
                </div>
                <div class="stat-card">
                    <p class="stat-title">"Total Units (Active)"</p>
                    <h3 class="stat-value">{move || balances.with(|rows| rows.len())}</h3>
                </div>
            </div>

            <div class="panel">
                <h3 class="panel-title">"Monthly Financial Report Export"</h3>
                <div class="panel-body export-row">
                    <label class="toolbar-filter">
                        <span>"Select Month:"</span>
                        <select
                            prop:value=move || report_month.get()
                            on:change=move |ev| set_report_month.set(event_target_value(&ev))
                        >
                            {REPORT_MONTHS
                                .iter()
                                .map(|(value, label)| {
                                    view! { <option value=*value>{*label}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="btn btn-primary" on:click=export_report>
                        {move || format!("Export {} Transactions", report_rows.get().len())}
                    </button>
                </div>
                {move || {
                    report_rows
                        .get()
                        .is_empty()
                        .then(|| {
                            view! {
                                <p class="form-error">
                                    "No completed payments found for the selected month."
                                </p>
                            }
                        })
                }}
            </div>

            <div class="table-card">
                <h3 class="panel-title">"Tenant Balances"</h3>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Unit"</th>
                            <th>"Tenant Name"</th>
                            <th>"Monthly Rent"</th>
                            <th>"Current Balance"</th>
                            <th class="col-right">"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            balances
                                .get()
                                .into_iter()
                                .map(|row: TenantBalance| {
                                    let reminder_row = row.clone();
                                    let balance_tone = if row.current_balance > 0 {
                                        "danger"
                                    } else if row.current_balance < 0 {
                                        "success"
                                    } else {
                                        "muted"
                                    };
                                    let balance_label = if row.current_balance > 0 {
                                        format!("{} Due", ksh(row.current_balance as u64))
                                    } else if row.current_balance < 0 {
                                        format!("{} Credit", ksh(row.current_balance.unsigned_abs()))
                                    } else {
                                        ksh(0)
                                    };
                                    view! {
                                        <tr>
                                            <td class="cell-primary">{row.unit.clone()}</td>
                                            <td>{row.name.clone()}</td>
                                            <td>{ksh(row.rent_due as u64)}</td>
                                            <td>
                                                <StatusBadge label=balance_label tone=balance_tone />
                                            </td>
                                            <td class="col-right">
                                                <button
                                                    class="action-btn"
                                                    on:click=move |_| send_balance_reminder(
                                                        reminder_row.clone(),
                                                    )
                                                >
                                                    "Send Reminder"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="table-card">
                <h3 class="panel-title">"Payment History (Last 6)"</h3>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Tenant / Unit"</th>
                            <th>"Amount"</th>
                            <th>"Type"</th>
                            <th>"Mode"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            history
                                .get()
                                .into_iter()
                                .take(6)
                                .map(|payment: Payment| {
                                    view! {
                                        <tr>
                                            <td class="cell-primary">{payment.date.to_string()}</td>
                                            <td>
                                                {format!("{} ({})", payment.tenant, payment.unit)}
                                            </td>
                                            <td class="cell-amount">
                                                {format!("+{}", ksh(payment.amount as u64))}
                                            </td>
                                            <td>
                                                <StatusBadge
                                                    label=payment.kind.as_str()
                                                    tone="info"
                                                />
                                            </td>
                                            <td>{payment.mode.as_str()}</td>
                                            <td>
                                                <StatusBadge
                                                    label=payment.status.as_str()
                                                    tone="success"
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                {move || {
                    history
                        .get()
                        .is_empty()
                        .then(|| {
                            view! {
                                <div class="empty-state">"No payment history recorded yet."</div>
                            }
                        })
                }}
            </div>

            {move || {
                modal_open
                    .get()
                    .then(|| {
                        view! {
                            <PaymentModal
                                on_save=on_save
                                on_close=move |_| set_modal_open.set(false)
                            />
                        }
                    })
            }}
        </section>
    }
}

/// Record-payment form, always in create mode
#[component]
fn PaymentModal(
    #[prop(into)] on_save: Callback<PaymentForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let today = chrono::Utc::now().date_naive();
    let (unit, set_unit) = signal(String::new());
    let (tenant, set_tenant) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (date, set_date) = signal(today.to_string());
    let (kind, set_kind) = signal(PaymentKind::Rent);
    let (mode, set_mode) = signal(PaymentMode::Mpesa);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(PaymentForm {
            unit: unit.get_untracked(),
            tenant: tenant.get_untracked(),
            amount: amount.get_untracked().parse().unwrap_or(0),
            date: date.get_untracked().parse().unwrap_or(today),
            kind: kind.get_untracked(),
            mode: mode.get_untracked(),
        });
    };

    view! {
        <Modal title="Record Payment" on_close=on_close>
            <form class="modal-form" on:submit=submit>
                <label class="field">
                    <span>"Unit"</span>
                    <input
                        type="text"
                        required
                        placeholder="e.g., Sunrise Apts - A4"
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Tenant Name"</span>
                    <input
                        type="text"
                        required
                        prop:value=move || tenant.get()
                        on:input=move |ev| set_tenant.set(event_target_value(&ev))
                    />
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Amount (Ksh)"</span>
                        <input
                            type="number"
                            required
                            min="0"
                            step="1"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Date"</span>
                        <input
                            type="date"
                            required
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="field-row">
                    <label class="field">
                        <span>"Type"</span>
                        <select
                            prop:value=move || kind.get().as_str().to_string()
                            on:change=move |ev| {
                                set_kind.set(PaymentKind::from_str(&event_target_value(&ev)))
                            }
                        >
                            <option value="Rent">"Rent"</option>
                            <option value="Deposit">"Deposit"</option>
                            <option value="Late Fee">"Late Fee"</option>
                        </select>
                    </label>
                    <label class="field">
                        <span>"Payment Mode"</span>
                        <select
                            prop:value=move || mode.get().as_str().to_string()
                            on:change=move |ev| {
                                set_mode.set(PaymentMode::from_str(&event_target_value(&ev)))
                            }
                        >
                            <option value="M-PESA">"M-PESA"</option>
                            <option value="Bank Transfer">"Bank Transfer"</option>
                            <option value="Credit Card">"Credit Card"</option>
                        </select>
                    </label>
                </div>
                <button type="submit" class="btn btn-primary btn-block">
                    "Record Payment"
                </button>
            </form>
        </Modal>
    }
}
