//! Property Entity
//!
//! A managed building with unit occupancy counts. Occupancy is validated:
//! `occupied_units` can never exceed `total_units`.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity, RecordId};
use crate::list::{ListConfig, RecordList};

/// Property lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PropertyStatus {
    #[default]
    Active,
    Maintenance,
    Upcoming,
    Archived,
}

/// All statuses, in the order the filter dropdown lists them
pub const PROPERTY_STATUSES: &[PropertyStatus] = &[
    PropertyStatus::Active,
    PropertyStatus::Maintenance,
    PropertyStatus::Upcoming,
    PropertyStatus::Archived,
];

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "Active",
            PropertyStatus::Maintenance => "Maintenance",
            PropertyStatus::Upcoming => "Upcoming",
            PropertyStatus::Archived => "Archived",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Maintenance" => PropertyStatus::Maintenance,
            "Upcoming" => PropertyStatus::Upcoming,
            "Archived" => PropertyStatus::Archived,
            _ => PropertyStatus::Active,
        }
    }
}

/// A property record owned by the properties page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: RecordId,
    /// Property name
    pub name: String,
    /// Neighbourhood / area
    pub location: String,
    /// Number of rentable units
    pub total_units: u32,
    /// Units currently occupied; invariant: <= total_units
    pub occupied_units: u32,
    /// Lifecycle status
    pub status: PropertyStatus,
}

impl Property {
    /// Build a property, rejecting occupancy above capacity.
    pub fn new(
        id: RecordId,
        name: String,
        location: String,
        total_units: u32,
        occupied_units: u32,
        status: PropertyStatus,
    ) -> DomainResult<Self> {
        check_occupancy(total_units, occupied_units)?;
        Ok(Self {
            id,
            name,
            location,
            total_units,
            occupied_units,
            status,
        })
    }

    /// Replace the unit counts, keeping the occupancy invariant.
    pub fn set_units(&mut self, total_units: u32, occupied_units: u32) -> DomainResult<()> {
        check_occupancy(total_units, occupied_units)?;
        self.total_units = total_units;
        self.occupied_units = occupied_units;
        Ok(())
    }

    pub fn vacant_units(&self) -> u32 {
        self.total_units - self.occupied_units
    }

    /// List configuration: search over name and location; canonical
    /// insertion order (no sort).
    pub fn list_config() -> ListConfig<Property> {
        ListConfig {
            searchable: &[|p| &p.name, |p| &p.location],
            sort: None,
        }
    }

    /// The properties the page mounts with
    pub fn seed_list() -> RecordList<Property> {
        let seed = vec![
            Property {
                id: 1,
                name: "Sunrise Apartments".to_string(),
                location: "Nairobi CBD".to_string(),
                total_units: 20,
                occupied_units: 18,
                status: PropertyStatus::Active,
            },
            Property {
                id: 2,
                name: "Westside Towers".to_string(),
                location: "Westlands".to_string(),
                total_units: 15,
                occupied_units: 10,
                status: PropertyStatus::Maintenance,
            },
            Property {
                id: 3,
                name: "Midland Flats".to_string(),
                location: "Kilimani".to_string(),
                total_units: 10,
                occupied_units: 10,
                status: PropertyStatus::Active,
            },
            Property {
                id: 4,
                name: "Valley View Homes".to_string(),
                location: "Lavington".to_string(),
                total_units: 5,
                occupied_units: 3,
                status: PropertyStatus::Active,
            },
            Property {
                id: 5,
                name: "Coastal Breeze Villas".to_string(),
                location: "Mombasa".to_string(),
                total_units: 8,
                occupied_units: 0,
                status: PropertyStatus::Upcoming,
            },
        ];
        RecordList::with_records(Property::list_config(), seed)
    }
}

fn check_occupancy(total_units: u32, occupied_units: u32) -> DomainResult<()> {
    if occupied_units > total_units {
        return Err(DomainError::InvalidInput(format!(
            "occupied units ({occupied_units}) cannot exceed total units ({total_units})"
        )));
    }
    Ok(())
}

impl Entity for Property {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_creation() {
        let property = Property::new(
            1,
            "Test Court".to_string(),
            "Ngong Road".to_string(),
            12,
            7,
            PropertyStatus::Active,
        )
        .expect("valid occupancy");
        assert_eq!(property.id(), 1);
        assert_eq!(property.vacant_units(), 5);
    }

    #[test]
    fn test_occupancy_over_capacity_rejected() {
        let err = Property::new(
            1,
            "Test Court".to_string(),
            "Ngong Road".to_string(),
            5,
            6,
            PropertyStatus::Active,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_set_units_keeps_invariant() {
        let mut property = Property::new(
            1,
            "Test Court".to_string(),
            "Ngong Road".to_string(),
            10,
            4,
            PropertyStatus::Active,
        )
        .unwrap();
        assert!(property.set_units(10, 11).is_err());
        // A failed update must leave the record untouched
        assert_eq!(property.occupied_units, 4);
        property.set_units(12, 12).unwrap();
        assert_eq!(property.vacant_units(), 0);
    }

    #[test]
    fn test_status_round_trip() {
        for status in PROPERTY_STATUSES {
            assert_eq!(PropertyStatus::from_str(status.as_str()), *status);
        }
    }
}
