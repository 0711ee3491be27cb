//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. Navigation is
//! a plain signal; each page owns its records for exactly as long as it is
//! mounted.

use leptos::prelude::*;

/// Dashboard destinations reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tenants,
    Properties,
    Payments,
    Maintenance,
    Settings,
}

/// Sidebar order
pub const PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Tenants,
    Page::Properties,
    Page::Payments,
    Page::Maintenance,
    Page::Settings,
];

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Tenants => "Tenants",
            Page::Properties => "Properties",
            Page::Payments => "Payments",
            Page::Maintenance => "Maintenance",
            Page::Settings => "Settings",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed page - read
    pub current_page: ReadSignal<Page>,
    /// Currently displayed page - write
    set_current_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(current_page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Switch the main content area to another page
    pub fn navigate(&self, page: Page) {
        self.set_current_page.set(page);
    }
}
