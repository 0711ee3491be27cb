//! Pages
//!
//! One component per sidebar destination, plus the auth screens.

mod auth;
mod dashboard;
mod maintenance;
mod payments;
mod properties;
mod settings;
mod tenants;

pub use auth::AuthScreen;
pub use dashboard::DashboardPage;
pub use maintenance::MaintenancePage;
pub use payments::PaymentsPage;
pub use properties::PropertiesPage;
pub use settings::SettingsPage;
pub use tenants::TenantsPage;
