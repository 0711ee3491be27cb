//! Payment Entity
//!
//! A received payment against one unit, plus the per-tenant balance rows
//! shown on the financial overview. Payment history always reads newest
//! first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, RecordId};
use crate::csv::CsvRecord;
use crate::list::{ListConfig, RecordList};

/// What the payment was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentKind {
    #[default]
    Rent,
    Deposit,
    LateFee,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Rent => "Rent",
            PaymentKind::Deposit => "Deposit",
            PaymentKind::LateFee => "Late Fee",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Deposit" => PaymentKind::Deposit,
            "Late Fee" => PaymentKind::LateFee,
            _ => PaymentKind::Rent,
        }
    }
}

/// Settlement state; only completed payments enter the monthly report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    Completed,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
        }
    }
}

/// Channel the money arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMode {
    #[default]
    Mpesa,
    BankTransfer,
    CreditCard,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Mpesa => "M-PESA",
            PaymentMode::BankTransfer => "Bank Transfer",
            PaymentMode::CreditCard => "Credit Card",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Bank Transfer" => PaymentMode::BankTransfer,
            "Credit Card" => PaymentMode::CreditCard,
            _ => PaymentMode::Mpesa,
        }
    }
}

/// A payment record owned by the payments page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: RecordId,
    /// Property / unit label
    pub unit: String,
    /// Paying tenant's name
    pub tenant: String,
    /// Amount in KES
    pub amount: u32,
    /// Date received
    pub date: NaiveDate,
    /// What the payment was for
    pub kind: PaymentKind,
    /// Settlement state
    pub status: PaymentStatus,
    /// Channel the money arrived through
    pub mode: PaymentMode,
}

impl Payment {
    /// "YYYY-MM" key used by the monthly report filter.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// List configuration: search over tenant and unit; newest first.
    pub fn list_config() -> ListConfig<Payment> {
        ListConfig {
            searchable: &[|p| &p.tenant, |p| &p.unit],
            sort: Some(|a, b| b.date.cmp(&a.date)),
        }
    }

    /// The payment history the page mounts with
    pub fn seed_list() -> RecordList<Payment> {
        let seed = vec![
            seed_payment(101, "Sunrise Apts - A4", "Alice Johnson", 150_000, "2025-10-28", PaymentKind::Rent, PaymentMode::Mpesa),
            seed_payment(102, "Valley View - 1A", "Charlie Brown", 120_000, "2025-10-05", PaymentKind::Rent, PaymentMode::BankTransfer),
            seed_payment(103, "Westside Towers - 12", "Bob Smith", 180_000, "2025-11-20", PaymentKind::Rent, PaymentMode::CreditCard),
            seed_payment(104, "Midland Flats - C1", "Dana Lee", 100_000, "2025-11-25", PaymentKind::Rent, PaymentMode::Mpesa),
            seed_payment(105, "East Wing - 3B", "Eve Martinez", 110_000, "2025-11-01", PaymentKind::Rent, PaymentMode::BankTransfer),
            seed_payment(106, "Sunrise Apts - A4", "Alice Johnson", 500_000, "2025-11-15", PaymentKind::LateFee, PaymentMode::Mpesa),
        ];
        RecordList::with_records(Payment::list_config(), seed)
    }
}

fn seed_payment(
    id: RecordId,
    unit: &str,
    tenant: &str,
    amount: u32,
    date: &str,
    kind: PaymentKind,
    mode: PaymentMode,
) -> Payment {
    Payment {
        id,
        unit: unit.to_string(),
        tenant: tenant.to_string(),
        amount,
        date: date.parse().unwrap_or_default(),
        kind,
        status: PaymentStatus::Completed,
        mode,
    }
}

impl Entity for Payment {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CsvRecord for Payment {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Date",
            "Unit",
            "Tenant_Name",
            "Type",
            "Amount_Ksh",
            "Payment_Mode",
            "Status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.to_string(),
            self.unit.clone(),
            self.tenant.clone(),
            self.kind.as_str().to_string(),
            self.amount.to_string(),
            self.mode.as_str().to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

/// One row of the tenant balances table on the financial overview.
/// Positive balance means money owed, negative means credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantBalance {
    pub id: RecordId,
    pub unit: String,
    pub name: String,
    /// Monthly rent in KES
    pub rent_due: u32,
    /// Outstanding amount in KES; negative is a credit
    pub current_balance: i64,
}

impl TenantBalance {
    /// The balance rows the page mounts with
    pub fn seed() -> Vec<TenantBalance> {
        vec![
            balance(1, "Sunrise Apts - A4", "Alice Johnson", 150_000, 10_000),
            balance(2, "Westside Towers - 12", "Bob Smith", 180_000, 0),
            balance(3, "Valley View - 1A", "Charlie Brown", 130_000, 20_000),
            balance(4, "Midland Flats - C1", "Dana Lee", 500_000, 0),
            balance(5, "East Wing - 3B", "Eve Martinez", 110_000, 0),
        ]
    }

    /// Sum of all positive balances
    pub fn total_outstanding(rows: &[TenantBalance]) -> i64 {
        rows.iter()
            .filter(|r| r.current_balance > 0)
            .map(|r| r.current_balance)
            .sum()
    }
}

fn balance(id: RecordId, unit: &str, name: &str, rent_due: u32, current_balance: i64) -> TenantBalance {
    TenantBalance {
        id,
        unit: unit.to_string(),
        name: name.to_string(),
        rent_due,
        current_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key() {
        let payment = seed_payment(
            1,
            "A1",
            "Test",
            1_000,
            "2025-11-03",
            PaymentKind::Rent,
            PaymentMode::Mpesa,
        );
        assert_eq!(payment.month_key(), "2025-11");
    }

    #[test]
    fn test_seed_sorted_newest_first_in_view() {
        let list = Payment::seed_list();
        let view = list.view("", &[]);
        let dates: Vec<_> = view.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_total_outstanding_ignores_credits() {
        let mut rows = TenantBalance::seed();
        rows[1].current_balance = -5_000;
        assert_eq!(TenantBalance::total_outstanding(&rows), 30_000);
    }

    #[test]
    fn test_csv_row_matches_headers() {
        let payment = seed_payment(
            1,
            "A1",
            "Test",
            1_000,
            "2025-11-03",
            PaymentKind::Rent,
            PaymentMode::Mpesa,
        );
        assert_eq!(payment.row().len(), Payment::headers().len());
    }
}
