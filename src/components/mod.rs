//! UI Components
//!
//! Reusable Leptos components.

mod confirm_delete;
mod modal;
mod sidebar;
mod stat_card;
mod status_badge;
mod toast;

pub use confirm_delete::ConfirmDeleteModal;
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toast::{use_toasts, NoticeBanner, Toasts};
