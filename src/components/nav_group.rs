//! Generic Sidebar Submenu Group
//!
//! Static nav group whose submenu participates in exclusive sibling
//! expansion: opening one group closes the others and resets their
//! expand indicator.

use leptos::prelude::*;

use crate::state::ExpansionState;

#[component]
pub fn NavGroup(
    /// Submenu key within the sibling group
    id: &'static str,
    /// Row label
    label: &'static str,
    /// Icon class for the row
    icon: &'static str,
    /// Expansion state shared by all sibling groups
    expansion: RwSignal<ExpansionState<&'static str>>,
    children: Children,
) -> impl IntoView {
    let is_open = move || expansion.read().is_open(&id);

    view! {
        <li class="nav-group">
            <a
                class="nav-link d-flex align-items-center"
                on:click=move |_| {
                    expansion.update(|e| {
                        e.toggle(id);
                    });
                }
            >
                <i class=icon></i>
                <span class="nav-text">{label}</span>
                <i
                    class="bi bi-caret-right-fill ms-auto nav-text"
                    class:rotate-down=is_open
                ></i>
            </a>
            <ul id=id class="nav flex-column ms-3" class:d-none=move || !is_open()>
                {children()}
            </ul>
        </li>
    }
}
