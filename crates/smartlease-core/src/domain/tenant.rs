//! Tenant Entity
//!
//! A tenant occupying one unit, with rent amount and payment standing.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, RecordId};
use crate::list::{ListConfig, RecordList};

/// Rent payment standing, the tenant page's filterable status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RentStatus {
    #[default]
    Paid,
    NotPaid,
}

impl RentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentStatus::Paid => "Paid",
            RentStatus::NotPaid => "Not Paid",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Not Paid" => RentStatus::NotPaid,
            _ => RentStatus::Paid,
        }
    }
}

/// Lease standing, displayed but not filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LeaseStatus {
    #[default]
    Active,
    Inactive,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Active => "Active",
            LeaseStatus::Inactive => "Inactive",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Inactive" => LeaseStatus::Inactive,
            _ => LeaseStatus::Active,
        }
    }
}

/// A tenant record owned by the tenants page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier
    pub id: RecordId,
    /// Full name
    pub name: String,
    /// Property / unit label, e.g. "Sunrise Apts - A4"
    pub unit: String,
    /// Phone number or email
    pub contact: String,
    /// Monthly rent in KES
    pub rent_due: u32,
    /// Rent payment standing
    pub balance: RentStatus,
    /// Lease standing
    pub status: LeaseStatus,
}

/// Rent amount attached to tenants created through the form, which has no
/// rent field of its own.
pub const DEFAULT_RENT_DUE: u32 = 150_000;

impl Tenant {
    pub fn new(id: RecordId, name: String, unit: String, contact: String) -> Self {
        Self {
            id,
            name,
            unit,
            contact,
            rent_due: DEFAULT_RENT_DUE,
            balance: RentStatus::Paid,
            status: LeaseStatus::Active,
        }
    }

    /// List configuration: search over name, unit, and contact; canonical
    /// insertion order (no sort).
    pub fn list_config() -> ListConfig<Tenant> {
        ListConfig {
            searchable: &[|t| &t.name, |t| &t.unit, |t| &t.contact],
            sort: None,
        }
    }

    /// The tenants the page mounts with
    pub fn seed_list() -> RecordList<Tenant> {
        let seed = vec![
            Tenant {
                id: 1,
                name: "James Kamau".to_string(),
                unit: "Sunrise Apts - A4".to_string(),
                contact: "0712 345 678".to_string(),
                rent_due: 150_000,
                balance: RentStatus::Paid,
                status: LeaseStatus::Active,
            },
            Tenant {
                id: 2,
                name: "Sarah Ochieng".to_string(),
                unit: "Sunrise Apts - B2".to_string(),
                contact: "0722 111 222".to_string(),
                rent_due: 150_000,
                balance: RentStatus::NotPaid,
                status: LeaseStatus::Inactive,
            },
            Tenant {
                id: 3,
                name: "David Mwangi".to_string(),
                unit: "Westside Towers - 12".to_string(),
                contact: "0733 444 555".to_string(),
                rent_due: 120_000,
                balance: RentStatus::Paid,
                status: LeaseStatus::Active,
            },
            Tenant {
                id: 4,
                name: "Fatuma Ali".to_string(),
                unit: "Midland Flats - C1".to_string(),
                contact: "0744 555 666".to_string(),
                rent_due: 250_000,
                balance: RentStatus::Paid,
                status: LeaseStatus::Active,
            },
            Tenant {
                id: 5,
                name: "Mark Njoroge".to_string(),
                unit: "Valley View - 1A".to_string(),
                contact: "0755 777 888".to_string(),
                rent_due: 100_000,
                balance: RentStatus::NotPaid,
                status: LeaseStatus::Inactive,
            },
        ];
        RecordList::with_records(Tenant::list_config(), seed)
    }
}

impl Entity for Tenant {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_creation() {
        let tenant = Tenant::new(
            1,
            "Test Tenant".to_string(),
            "A1".to_string(),
            "0700 000 000".to_string(),
        );
        assert_eq!(tenant.id(), 1);
        assert_eq!(tenant.balance, RentStatus::Paid);
        assert_eq!(tenant.status, LeaseStatus::Active);
        assert_eq!(tenant.rent_due, DEFAULT_RENT_DUE);
    }

    #[test]
    fn test_rent_status_round_trip() {
        assert_eq!(RentStatus::NotPaid.as_str(), "Not Paid");
        assert_eq!(RentStatus::from_str("Not Paid"), RentStatus::NotPaid);
        assert_eq!(RentStatus::from_str("Paid"), RentStatus::Paid);
    }

    #[test]
    fn test_seed_list_ids_are_unique() {
        let list = Tenant::seed_list();
        let mut ids: Vec<_> = list.records().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }
}
