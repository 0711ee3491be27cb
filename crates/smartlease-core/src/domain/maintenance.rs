//! Maintenance Ticket Entity
//!
//! A repair request against one unit. The derived view orders open work
//! first: Pending, then In Progress, then Done, newest report first within
//! a status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, RecordId};
use crate::list::{ListConfig, RecordList};

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Done => "Done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "In Progress" => TicketStatus::InProgress,
            "Done" => TicketStatus::Done,
            _ => TicketStatus::Pending,
        }
    }

    /// Sort weight: open work sorts before finished work.
    pub fn priority(&self) -> u8 {
        match self {
            TicketStatus::Pending => 1,
            TicketStatus::InProgress => 2,
            TicketStatus::Done => 3,
        }
    }
}

/// Issue category reported by the tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IssueType {
    #[default]
    BrokenTap,
    NoElectricity,
    Leak,
    InternetIssues,
    HvacFailure,
    Other,
}

/// All issue types, in the order the form and filter dropdowns list them
pub const ISSUE_TYPES: &[IssueType] = &[
    IssueType::BrokenTap,
    IssueType::NoElectricity,
    IssueType::Leak,
    IssueType::InternetIssues,
    IssueType::HvacFailure,
    IssueType::Other,
];

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::BrokenTap => "Broken Tap",
            IssueType::NoElectricity => "No Electricity",
            IssueType::Leak => "Leak",
            IssueType::InternetIssues => "Internet Issues",
            IssueType::HvacFailure => "HVAC Failure",
            IssueType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Broken Tap" => IssueType::BrokenTap,
            "No Electricity" => IssueType::NoElectricity,
            "Leak" => IssueType::Leak,
            "Internet Issues" => IssueType::InternetIssues,
            "HVAC Failure" => IssueType::HvacFailure,
            _ => IssueType::Other,
        }
    }
}

/// A maintenance ticket owned by the maintenance page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTicket {
    /// Unique identifier
    pub id: RecordId,
    /// Display number, derived from the id at creation ("TKT-001")
    pub ticket: String,
    /// Issue category
    pub issue_type: IssueType,
    /// Free-text problem description
    pub description: String,
    /// Property / unit label
    pub unit: String,
    /// Lifecycle status
    pub status: TicketStatus,
    /// Landlord's cost estimate in KES; 0 means not yet estimated
    pub estimated_cost: u32,
    /// Date the issue was reported
    pub reported_on: NaiveDate,
}

impl MaintenanceTicket {
    /// Build a new ticket with its display number derived from the id.
    pub fn new(
        id: RecordId,
        issue_type: IssueType,
        description: String,
        unit: String,
        reported_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            ticket: Self::ticket_number(id),
            issue_type,
            description,
            unit,
            status: TicketStatus::Pending,
            estimated_cost: 0,
            reported_on,
        }
    }

    /// Zero-padded display number for an id, e.g. 7 -> "TKT-007".
    pub fn ticket_number(id: RecordId) -> String {
        format!("TKT-{id:03}")
    }

    /// List configuration: search over ticket number, unit, and
    /// description; status-priority sort with newest report first inside a
    /// status.
    pub fn list_config() -> ListConfig<MaintenanceTicket> {
        ListConfig {
            searchable: &[|t| &t.ticket, |t| &t.unit, |t| &t.description],
            sort: Some(|a, b| {
                a.status
                    .priority()
                    .cmp(&b.status.priority())
                    .then(b.reported_on.cmp(&a.reported_on))
            }),
        }
    }

    /// The tickets the page mounts with
    pub fn seed_list() -> RecordList<MaintenanceTicket> {
        let seed = vec![
            seed_ticket(
                1,
                IssueType::BrokenTap,
                "Kitchen sink tap is constantly dripping.",
                "Sunrise Apts - A4",
                TicketStatus::InProgress,
                150,
                "2025-11-20",
            ),
            seed_ticket(
                2,
                IssueType::NoElectricity,
                "Power outage in the living room and master bedroom.",
                "Westside Towers - 12",
                TicketStatus::Pending,
                300,
                "2025-11-25",
            ),
            seed_ticket(
                3,
                IssueType::InternetIssues,
                "No internet connection for the last 48 hours.",
                "Sunrise Apts - A4",
                TicketStatus::Done,
                50,
                "2025-11-15",
            ),
            seed_ticket(
                4,
                IssueType::Leak,
                "Water spot appearing on the ceiling of the downstairs unit.",
                "Valley View - 1A",
                TicketStatus::Pending,
                500,
                "2025-11-27",
            ),
            seed_ticket(
                5,
                IssueType::HvacFailure,
                "Air conditioning stopped working entirely.",
                "Midland Flats - C1",
                TicketStatus::Pending,
                0,
                "2025-11-28",
            ),
        ];
        RecordList::with_records(MaintenanceTicket::list_config(), seed)
    }
}

fn seed_ticket(
    id: RecordId,
    issue_type: IssueType,
    description: &str,
    unit: &str,
    status: TicketStatus,
    estimated_cost: u32,
    reported_on: &str,
) -> MaintenanceTicket {
    MaintenanceTicket {
        id,
        ticket: MaintenanceTicket::ticket_number(id),
        issue_type,
        description: description.to_string(),
        unit: unit.to_string(),
        status,
        estimated_cost,
        reported_on: reported_on.parse().unwrap_or_default(),
    }
}

impl Entity for MaintenanceTicket {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_number_padding() {
        assert_eq!(MaintenanceTicket::ticket_number(1), "TKT-001");
        assert_eq!(MaintenanceTicket::ticket_number(42), "TKT-042");
        assert_eq!(MaintenanceTicket::ticket_number(1234), "TKT-1234");
    }

    #[test]
    fn test_new_ticket_defaults() {
        let date = "2025-11-30".parse().unwrap();
        let ticket = MaintenanceTicket::new(
            7,
            IssueType::Leak,
            "Dripping ceiling".to_string(),
            "A1".to_string(),
            date,
        );
        assert_eq!(ticket.ticket, "TKT-007");
        assert_eq!(ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.estimated_cost, 0);
    }

    #[test]
    fn test_status_priority_order() {
        assert!(TicketStatus::Pending.priority() < TicketStatus::InProgress.priority());
        assert!(TicketStatus::InProgress.priority() < TicketStatus::Done.priority());
    }

    #[test]
    fn test_issue_type_round_trip() {
        for issue in ISSUE_TYPES {
            assert_eq!(IssueType::from_str(issue.as_str()), *issue);
        }
        assert_eq!(IssueType::from_str("Something Else"), IssueType::Other);
    }
}
