//! Stat Card Component
//!
//! Dashboard metric card: title, headline value, and a toned subtext.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] subtext: String,
    #[prop(into)] tone: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-title">{title}</p>
            <h3 class="stat-value">{value}</h3>
            <p class=format!("stat-subtext text-{tone}")>{subtext}</p>
        </div>
    }
}
