//! Stubbed External Services
//!
//! Frontend wrappers over the core collaborator stubs, organized by
//! concern. Each async wrapper awaits a fixed simulated latency before
//! resolving, standing in for the network round-trip a real backend would
//! cost.

mod auth;
mod export;
mod messaging;

pub use auth::{use_auth, AuthService};
pub use export::download_csv;
pub use messaging::{send_lease, send_reminder};
