//! Status Badge Component
//!
//! Colored pill for the status enums shown in tables and cards.

use leptos::prelude::*;

/// Status badge with a tone-derived color
///
/// # Arguments
/// * `label` - the status text
/// * `tone` - one of "success", "danger", "warning", "info", "muted"
#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    #[prop(into)] tone: String,
) -> impl IntoView {
    view! { <span class=format!("badge badge-{tone}")>{label}</span> }
}
