//! Pharmacy Assignment Forms
//!
//! Manager and staff assignment forms shown with the manager section. Both
//! embed a lazily loaded pharmacy dropdown; the manager form selects several
//! pharmacies, the staff form exactly one. Submission is a plain form post,
//! the dropdowns only populate the named inputs.

use leptos::prelude::*;

use crate::components::PharmacyDropdown;
use crate::state::SelectionKind;

#[component]
pub fn PharmacyForms() -> impl IntoView {
    view! {
        <div class="assignment-forms">
            <ManagerForm />
            <StaffForm />
        </div>
    }
}

#[component]
fn ManagerForm() -> impl IntoView {
    view! {
        <form id="manager-form" method="post" action="/pharmacy/assign-managers/">
            <label class="form-label">"Managed pharmacies"</label>
            <PharmacyDropdown
                kind=SelectionKind::Multiple
                placeholder="Select Pharmacy"
                input_name="pharmacies[]"
                panel_id="manager-Dropdown"
            />
            <button type="submit" class="btn btn-primary">"Assign"</button>
        </form>
    }
}

#[component]
fn StaffForm() -> impl IntoView {
    view! {
        <form id="staff-form" method="post" action="/pharmacy/assign-staff/">
            <label class="form-label">"Assigned pharmacy"</label>
            <PharmacyDropdown
                kind=SelectionKind::Single
                placeholder="Select Pharmacy"
                input_name="staff_pharmacy"
                panel_id="staff-Dropdown"
            />
            <button type="submit" class="btn btn-primary">"Assign"</button>
        </form>
    }
}
