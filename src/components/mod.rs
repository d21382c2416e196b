//! UI Components
//!
//! Reusable Leptos components.

mod assign_forms;
mod auth_popups;
mod content_area;
mod nav_group;
mod pharmacy_dropdown;
mod pharmacy_nav;
mod scroll_top;
mod sidebar;
mod top_bar;

pub use assign_forms::PharmacyForms;
pub use auth_popups::AuthPopups;
pub use content_area::ContentArea;
pub use nav_group::NavGroup;
pub use pharmacy_dropdown::PharmacyDropdown;
pub use pharmacy_nav::PharmacyNav;
pub use scroll_top::ScrollTop;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
