//! Sidebar Navigation
//!
//! Collapsible sidebar hosting the static nav groups and the pharmacy tree.
//! The static groups share one exclusive expansion state; pharmacy submenus
//! toggle independently inside `PharmacyNav`.

use leptos::prelude::*;

use crate::components::{NavGroup, PharmacyNav};
use crate::state::ExpansionState;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let nav_expansion = RwSignal::new(ExpansionState::<&'static str>::new(true));

    view! {
        <aside id="sidebar" class:collapsed=move || store.sidebar_collapsed().get()>
            <button
                class="sidebar-toggle"
                on:click=move |_| store.sidebar_collapsed().update(|c| *c = !*c)
            >
                <i class="bi bi-list"></i>
            </button>
            <ul class="nav flex-column">
                <li class="nav-item">
                    <a class="nav-link" href="/dashboard/">
                        <i class="bi bi-speedometer2"></i>
                        <span class="nav-text">"Dashboard"</span>
                    </a>
                </li>
                <PharmacyNav />
                <NavGroup
                    id="accounts-submenu"
                    label="Accounts"
                    icon="bi bi-people"
                    expansion=nav_expansion
                >
                    <li class="nav-item">
                        <a class="nav-link" href="/accounts/managers/">"Managers"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/accounts/staff/">"Staff"</a>
                    </li>
                </NavGroup>
                <NavGroup
                    id="reports-submenu"
                    label="Reports"
                    icon="bi bi-graph-up"
                    expansion=nav_expansion
                >
                    <li class="nav-item">
                        <a class="nav-link" href="/reports/sales/">"Sales Summary"</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href="/reports/stock/">"Stock Levels"</a>
                    </li>
                </NavGroup>
            </ul>
        </aside>
    }
}
