//! Message Dispatch
//!
//! The interface a real SMS/email/e-signature backend would implement,
//! plus the stub the mock-up runs against. The stub validates recipients
//! and returns templated confirmations; transport latency is simulated by
//! the caller, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dispatch failure kinds a real provider can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("network error while contacting the messaging provider")]
    Network,
    #[error("the recipient address is missing or malformed")]
    InvalidRecipient,
    #[error("the messaging provider rejected the request")]
    ProviderRejected,
}

/// Rent reminder variants, one per quick action on the tenants table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderKind {
    RentDue,
    RentLate,
    RentReceived,
}

impl ReminderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderKind::RentDue => "Rent Due",
            ReminderKind::RentLate => "Rent Late",
            ReminderKind::RentReceived => "Rent Received",
        }
    }

    /// Message body for a tenant in a unit
    pub fn body(&self, tenant_name: &str, unit: &str) -> String {
        match self {
            ReminderKind::RentDue => format!(
                "Hi {tenant_name}, your rent for {unit} is due in 3 days. Please prepare for payment."
            ),
            ReminderKind::RentLate => format!(
                "URGENT: Rent for {unit} is marked as Not Paid. Please settle immediately."
            ),
            ReminderKind::RentReceived => format!(
                "Thank you {tenant_name}! Rent for {unit} has been received and marked as Paid."
            ),
        }
    }
}

/// Lease agreement templates offered by the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LeaseTemplate {
    #[default]
    Standard,
    MonthToMonth,
    Commercial,
}

/// All templates, in the order the dropdown lists them
pub const LEASE_TEMPLATES: &[LeaseTemplate] = &[
    LeaseTemplate::Standard,
    LeaseTemplate::MonthToMonth,
    LeaseTemplate::Commercial,
];

impl LeaseTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            LeaseTemplate::Standard => "Standard Residential Lease (1 Year)",
            LeaseTemplate::MonthToMonth => "Month-to-Month Agreement",
            LeaseTemplate::Commercial => "Commercial Property Lease",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            LeaseTemplate::Standard => "Standard_1Yr_Lease.pdf",
            LeaseTemplate::MonthToMonth => "MTM_Agreement.pdf",
            LeaseTemplate::Commercial => "Commercial_Lease.pdf",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Month-to-Month Agreement" => LeaseTemplate::MonthToMonth,
            "Commercial Property Lease" => LeaseTemplate::Commercial,
            _ => LeaseTemplate::Standard,
        }
    }
}

/// Seam for a real messaging/e-signature backend
#[async_trait]
pub trait MessageDispatch: Send + Sync {
    /// Send a rent reminder to a tenant's contact address.
    async fn send_reminder(
        &self,
        recipient: &str,
        tenant_name: &str,
        unit: &str,
        kind: ReminderKind,
    ) -> Result<String, DispatchError>;

    /// Generate a lease from a template and send it for digital signature.
    async fn send_lease(
        &self,
        tenant_name: &str,
        tenant_email: &str,
        template: LeaseTemplate,
    ) -> Result<String, DispatchError>;
}

/// Stub dispatcher: validates input, logs the simulated send, and returns
/// the confirmation a real provider would
pub struct StubDispatch;

#[async_trait]
impl MessageDispatch for StubDispatch {
    async fn send_reminder(
        &self,
        recipient: &str,
        tenant_name: &str,
        unit: &str,
        kind: ReminderKind,
    ) -> Result<String, DispatchError> {
        if recipient.trim().is_empty() {
            return Err(DispatchError::InvalidRecipient);
        }
        log::info!(
            "simulated message to {tenant_name} ({recipient}): {}",
            kind.body(tenant_name, unit)
        );
        Ok(format!(
            "{} reminder sent to {tenant_name} successfully.",
            kind.label()
        ))
    }

    async fn send_lease(
        &self,
        tenant_name: &str,
        tenant_email: &str,
        template: LeaseTemplate,
    ) -> Result<String, DispatchError> {
        if tenant_name.trim().is_empty() || !tenant_email.contains('@') {
            return Err(DispatchError::InvalidRecipient);
        }
        log::info!(
            "simulated lease dispatch: {} ({}) to {tenant_name} <{tenant_email}>",
            template.name(),
            template.file_name()
        );
        Ok(format!(
            "Lease generated and sent to {tenant_name} ({tenant_email}) for digital signature!"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reminder_confirmation_names_the_tenant() {
        let confirmation = StubDispatch
            .send_reminder("0712 345 678", "James Kamau", "Sunrise Apts - A4", ReminderKind::RentDue)
            .await
            .unwrap();
        assert!(confirmation.contains("James Kamau"));
        assert!(confirmation.contains("Rent Due"));
    }

    #[tokio::test]
    async fn test_empty_recipient_is_rejected() {
        let err = StubDispatch
            .send_reminder("  ", "James Kamau", "A4", ReminderKind::RentLate)
            .await
            .unwrap_err();
        assert_eq!(err, DispatchError::InvalidRecipient);
    }

    #[tokio::test]
    async fn test_lease_requires_plausible_email() {
        let err = StubDispatch
            .send_lease("Francis Baya", "not-an-email", LeaseTemplate::Standard)
            .await
            .unwrap_err();
        assert_eq!(err, DispatchError::InvalidRecipient);
    }

    #[tokio::test]
    async fn test_lease_confirmation_mentions_signature() {
        let confirmation = StubDispatch
            .send_lease("Francis Baya", "baya@gmail.com", LeaseTemplate::MonthToMonth)
            .await
            .unwrap();
        assert!(confirmation.contains("digital signature"));
    }

    #[test]
    fn test_reminder_bodies_fill_in_the_unit() {
        for kind in [ReminderKind::RentDue, ReminderKind::RentLate, ReminderKind::RentReceived] {
            assert!(kind.body("Jane", "B2").contains("B2"));
        }
    }

    #[test]
    fn test_template_round_trip() {
        for template in LEASE_TEMPLATES {
            assert_eq!(LeaseTemplate::from_str(template.name()), *template);
        }
    }
}
