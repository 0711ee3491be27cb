//! Generic Record List Store
//!
//! One reusable engine behind the tenant, property, maintenance, and
//! payment pages: each page owns a `RecordList` configured with its
//! searchable fields and sort order, mutates it through
//! create/update/delete, and renders the pure derived `view`.

use std::cmp::Ordering;

use crate::domain::{DomainError, DomainResult, Entity, RecordId};

/// Per-domain configuration for a record list
pub struct ListConfig<T: 'static> {
    /// Extractors for the text fields a search query scans
    pub searchable: &'static [fn(&T) -> &str],
    /// Total order applied to every derived view; None keeps canonical
    /// insertion order
    pub sort: Option<fn(&T, &T) -> Ordering>,
}

impl<T> Clone for ListConfig<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListConfig<T> {}

/// The canonical in-memory record sequence one page owns.
///
/// Ids are assigned from a high-water mark so they are never reused, even
/// after the highest-numbered record is deleted.
pub struct RecordList<T: Entity<Id = RecordId> + 'static> {
    config: ListConfig<T>,
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Entity<Id = RecordId>> RecordList<T> {
    /// Empty list with the given configuration
    pub fn new(config: ListConfig<T>) -> Self {
        Self {
            config,
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// List seeded with existing records; the id watermark starts past the
    /// highest seeded id
    pub fn with_records(config: ListConfig<T>, records: Vec<T>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self {
            config,
            records,
            next_id,
        }
    }

    /// Create a record, letting the caller build it around the assigned id.
    /// The record is appended to the canonical list and the id returned.
    pub fn create_with(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(build(id));
        id
    }

    /// Apply a mutation to the record with the given id and return the
    /// updated record, or `NotFound` if no record matches.
    pub fn update_with(
        &mut self,
        id: RecordId,
        apply: impl FnOnce(&mut T),
    ) -> DomainResult<T> {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                apply(record);
                Ok(record.clone())
            }
            None => Err(DomainError::NotFound(format!("record {id}"))),
        }
    }

    /// Remove and return the record with the given id, or `NotFound` if no
    /// record matches. Irreversible; callers gate this behind an explicit
    /// confirmation step.
    pub fn delete(&mut self, id: RecordId) -> DomainResult<T> {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(DomainError::NotFound(format!("record {id}"))),
        }
    }

    /// Derive the read-only view: filters ANDed, then a case-insensitive
    /// substring search across the configured fields, then the configured
    /// sort. Recomputed in full on every call; the canonical list is never
    /// touched.
    pub fn view(&self, query: &str, filters: &[&dyn Fn(&T) -> bool]) -> Vec<T> {
        let needle = query.trim().to_lowercase();
        let mut out: Vec<T> = self
            .records
            .iter()
            .filter(|r| filters.iter().all(|keep| keep(r)))
            .filter(|r| {
                needle.is_empty()
                    || self
                        .config
                        .searchable
                        .iter()
                        .any(|field| field(r).to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        if let Some(cmp) = self.config.sort {
            out.sort_by(cmp);
        }
        out
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The canonical list in insertion order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        IssueType, MaintenanceTicket, RentStatus, Tenant, TicketStatus,
    };

    fn tenant_list() -> RecordList<Tenant> {
        Tenant::seed_list()
    }

    fn new_tenant(id: RecordId) -> Tenant {
        Tenant::new(
            id,
            format!("Tenant {id}"),
            "East Wing - 3B".to_string(),
            "0700 000 000".to_string(),
        )
    }

    #[test]
    fn test_size_tracks_creates_and_deletes() {
        let mut list = tenant_list();
        let initial = list.len();

        let a = list.create_with(new_tenant);
        let b = list.create_with(new_tenant);
        assert_eq!(list.len(), initial + 2);

        list.update_with(a, |t| t.name = "Renamed".to_string())
            .unwrap();
        assert_eq!(list.len(), initial + 2, "updates never change size");

        list.delete(b).unwrap();
        assert_eq!(list.len(), initial + 1);
    }

    #[test]
    fn test_create_assigns_strictly_increasing_ids() {
        let mut list = tenant_list();
        let max_seed = list.records().iter().map(|t| t.id).max().unwrap();
        let id = list.create_with(new_tenant);
        assert!(id > max_seed);
    }

    #[test]
    fn test_ids_never_reused_after_deletion() {
        let mut list = RecordList::with_records(
            Tenant::list_config(),
            vec![new_tenant(1), new_tenant(2), new_tenant(3)],
        );
        list.delete(2).unwrap();
        assert_eq!(list.create_with(new_tenant), 4);

        // Even deleting the highest id must not release it
        list.delete(4).unwrap();
        list.delete(3).unwrap();
        assert_eq!(list.create_with(new_tenant), 5);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut list = tenant_list();
        let err = list
            .update_with(999, |t| t.name = "Ghost".to_string())
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let mut list = tenant_list();
        let before: Vec<_> = list.records().to_vec();
        assert!(matches!(list.delete(999), Err(DomainError::NotFound(_))));
        assert_eq!(list.records(), &before[..], "failed delete leaves the list unchanged");
    }

    #[test]
    fn test_unfiltered_view_returns_full_list_and_is_idempotent() {
        let list = tenant_list();
        let first = list.view("", &[]);
        let second = list.view("", &[]);
        assert_eq!(first.len(), list.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let list = tenant_list();
        let view = list.view("SUN", &[]);
        assert!(!view.is_empty());
        assert!(view.iter().all(|t| t.unit.contains("Sunrise")));
    }

    #[test]
    fn test_search_scans_all_configured_fields() {
        let list = tenant_list();
        // "0733" only appears in David Mwangi's contact field
        let view = list.view("0733", &[]);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "David Mwangi");
    }

    #[test]
    fn test_view_never_mutates_canonical_list() {
        let list = tenant_list();
        let before: Vec<_> = list.records().to_vec();
        let _ = list.view("sunrise", &[&|t: &Tenant| t.balance == RentStatus::Paid]);
        assert_eq!(list.records(), &before[..]);
    }

    #[test]
    fn test_filter_and_update_scenario() {
        let mut list = RecordList::with_records(
            Tenant::list_config(),
            vec![new_tenant(1)],
        );
        let not_paid = |t: &Tenant| t.balance == RentStatus::NotPaid;

        assert!(list.view("", &[&not_paid]).is_empty());

        list.update_with(1, |t| t.balance = RentStatus::NotPaid).unwrap();
        let view = list.view("", &[&not_paid]);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_maintenance_status_priority_sort() {
        let mut list = RecordList::new(MaintenanceTicket::list_config());
        let date = |d: &str| d.parse().unwrap();
        for (status, reported) in [
            (TicketStatus::Done, "2025-11-15"),
            (TicketStatus::Pending, "2025-11-20"),
            (TicketStatus::InProgress, "2025-11-25"),
            (TicketStatus::Pending, "2025-11-27"),
        ] {
            list.create_with(|id| {
                let mut t = MaintenanceTicket::new(
                    id,
                    IssueType::Other,
                    "test".to_string(),
                    "A1".to_string(),
                    date(reported),
                );
                t.status = status;
                t
            });
        }

        let view = list.view("", &[]);
        let statuses: Vec<_> = view.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![
                TicketStatus::Pending,
                TicketStatus::Pending,
                TicketStatus::InProgress,
                TicketStatus::Done,
            ]
        );
        // Ties broken by report date descending
        assert!(view[0].reported_on > view[1].reported_on);
    }

    #[test]
    fn test_filters_are_anded() {
        let list = MaintenanceTicket::seed_list();
        let pending = |t: &MaintenanceTicket| t.status == TicketStatus::Pending;
        let sunrise = |t: &MaintenanceTicket| t.unit == "Sunrise Apts - A4";
        // Seed has pending tickets and Sunrise tickets, but none both
        assert!(!list.view("", &[&pending]).is_empty());
        assert!(!list.view("", &[&sunrise]).is_empty());
        assert!(list.view("", &[&pending, &sunrise]).is_empty());
    }
}
