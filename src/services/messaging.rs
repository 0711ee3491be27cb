//! Messaging Service
//!
//! Frontend bindings to the stubbed dispatch backend: rent reminders from
//! the tenant tables and lease e-signature requests from settings.

use gloo_timers::future::TimeoutFuture;
use smartlease_core::messaging::{
    DispatchError, LeaseTemplate, MessageDispatch, ReminderKind, StubDispatch,
};

/// Simulated SMS/email round-trip
const REMINDER_LATENCY_MS: u32 = 500;
/// Lease generation plus e-signature dispatch is noticeably slower
const LEASE_LATENCY_MS: u32 = 2_000;

/// Send a rent reminder to a tenant's contact address.
pub async fn send_reminder(
    recipient: &str,
    tenant_name: &str,
    unit: &str,
    kind: ReminderKind,
) -> Result<String, DispatchError> {
    TimeoutFuture::new(REMINDER_LATENCY_MS).await;
    StubDispatch
        .send_reminder(recipient, tenant_name, unit, kind)
        .await
}

/// Generate a lease from a template and send it for digital signature.
pub async fn send_lease(
    tenant_name: &str,
    tenant_email: &str,
    template: LeaseTemplate,
) -> Result<String, DispatchError> {
    TimeoutFuture::new(LEASE_LATENCY_MS).await;
    StubDispatch
        .send_lease(tenant_name, tenant_email, template)
        .await
}
