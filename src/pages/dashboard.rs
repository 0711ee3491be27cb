//! Dashboard Page
//!
//! Landing view after sign-in: headline metrics computed from the seeded
//! books, plus the recent-activity feed and upcoming tasks.

use leptos::prelude::*;

use smartlease_core::domain::{
    MaintenanceTicket, Payment, PaymentStatus, Property, RentStatus, Tenant, TenantBalance,
    TicketStatus,
};

use crate::components::{StatCard, StatusBadge};
use crate::money::ksh;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();

    // Snapshot of the seeded books; the dashboard is a read-only summary
    let tenants = Tenant::seed_list();
    let properties = Property::seed_list();
    let tickets = MaintenanceTicket::seed_list();
    let payments = Payment::seed_list();
    let balances = TenantBalance::seed();

    let revenue: u64 = payments
        .records()
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed && p.month_key() == "2025-11")
        .map(|p| p.amount as u64)
        .sum();
    let tenant_count = tenants.len();
    let overdue = tenants
        .records()
        .iter()
        .filter(|t| t.balance == RentStatus::NotPaid)
        .count();
    let pending_rent = TenantBalance::total_outstanding(&balances).max(0) as u64;
    let property_count = properties.len();
    let total_units: u32 = properties.records().iter().map(|p| p.total_units).sum();
    let occupied_units: u32 = properties.records().iter().map(|p| p.occupied_units).sum();
    let vacant_units = total_units - occupied_units;
    let occupancy = if total_units > 0 {
        occupied_units * 100 / total_units
    } else {
        0
    };
    let open_tickets = tickets
        .records()
        .iter()
        .filter(|t| t.status != TicketStatus::Done)
        .count();

    let welcome = move || {
        store
            .session()
            .get()
            .map(|s| s.display_name)
            .unwrap_or_else(|| "Landlord".to_string())
    };

    let recent_activity = [
        (
            "Payment Received",
            "Ksh100,000 from Dana Lee (Midland Flats - C1)",
            "Nov 25, 2025",
            "success",
        ),
        (
            "Maintenance Request",
            "HVAC failure reported at Midland Flats - C1",
            "Nov 28, 2025",
            "warning",
        ),
        (
            "Lease Renewal Due",
            "David Mwangi (Westside Towers - 12) lease ends Nov 30",
            "Nov 22, 2025",
            "info",
        ),
        (
            "New Tenant Added",
            "Fatuma Ali (Midland Flats - C1) registered",
            "Nov 21, 2025",
            "success",
        ),
    ];

    let upcoming_tasks = [
        ("Collect rent for Sunrise Apts", "Dec 1, 2025"),
        ("Inspect vacant unit B3", "Dec 5, 2025"),
    ];

    view! {
        <section class="page">
            <header class="page-header">
                <div>
                    <h2>"Welcome Back, " <span class="text-accent">{welcome}</span> "!"</h2>
                    <p class="page-subtitle">
                        {format!("You are managing {property_count} properties.")}
                    </p>
                </div>
            </header>

            <div class="stat-grid">
                <StatCard
                    title="Total Revenue"
                    value=ksh(revenue)
                    subtext="Collected in November"
                    tone="success"
                />
                <StatCard
                    title="Total Tenants"
                    value=tenant_count.to_string()
                    subtext=format!("{vacant_units} units vacant")
                    tone="info"
                />
                <StatCard
                    title="Pending Rent"
                    value=ksh(pending_rent)
                    subtext=format!("{overdue} tenants overdue")
                    tone="danger"
                />
                <StatCard
                    title="Occupancy Rate"
                    value=format!("{occupancy}%")
                    subtext=format!("{open_tickets} open maintenance tickets")
                    tone="info"
                />
            </div>

            <div class="dashboard-columns">
                <div class="panel">
                    <h3 class="panel-title">"Recent Activity"</h3>
                    <ul class="activity-list">
                        {recent_activity
                            .into_iter()
                            .map(|(kind, description, date, tone)| {
                                view! {
                                    <li class="activity-item">
                                        <StatusBadge label=kind tone=tone />
                                        <div class="activity-body">
                                            <p>{description}</p>
                                            <p class="cell-secondary">{date}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="panel">
                    <h3 class="panel-title">"Upcoming Tasks"</h3>
                    <ul class="activity-list">
                        {upcoming_tasks
                            .into_iter()
                            .map(|(task, date)| {
                                view! {
                                    <li class="activity-item">
                                        <div class="activity-body">
                                            <p>{task}</p>
                                            <p class="cell-secondary">{date}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
