//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::Section;

/// What the main content region is currently showing
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContentState {
    /// Initial dashboard panel
    #[default]
    Welcome,
    /// A fragment request is in flight
    Loading,
    /// Server-rendered fragment injected into the content area
    Fragment {
        pharmacy_id: u32,
        section: Section,
        html: String,
    },
    /// Fragment request failed
    NotFound,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current content region state
    pub content: ContentState,
    /// Sidebar collapsed flag (mirrors the `collapsed` CSS class)
    pub sidebar_collapsed: bool,
    /// Mobile nav drawer open flag (mirrors `mobile-nav-active` on the body)
    pub mobile_nav_open: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Kick off a content fragment load for one pharmacy section.
///
/// Overlapping loads are not serialized: the response that resolves last
/// wins, same as repeated sidebar clicks in the served dashboard.
pub fn load_content(store: AppStore, pharmacy_id: u32, section: Section) {
    store.content().set(ContentState::Loading);
    spawn_local(async move {
        match api::fetch_fragment(pharmacy_id, section).await {
            Ok(html) => store.content().set(ContentState::Fragment {
                pharmacy_id,
                section,
                html,
            }),
            Err(err) => {
                web_sys::console::error_1(&format!("Error loading page: {}", err).into());
                store.content().set(ContentState::NotFound);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_defaults_to_welcome() {
        let state = AppState::new();
        assert_eq!(state.content, ContentState::Welcome);
        assert!(!state.sidebar_collapsed);
        assert!(!state.mobile_nav_open);
    }
}
