//! Pharmacy Dropdown Selector
//!
//! Lazy-loading dropdown backed by the pharmacy list endpoint. The list is
//! fetched on the first click and cached for the widget's lifetime; a failed
//! fetch leaves the panel unrendered so the next click retries.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::Pharmacy;
use crate::state::{LoadState, Selection, SelectionKind};

#[component]
pub fn PharmacyDropdown(
    kind: SelectionKind,
    /// Trigger caption while nothing is selected
    placeholder: &'static str,
    /// `name` attribute of the rendered inputs
    input_name: &'static str,
    /// Element id of the panel
    panel_id: &'static str,
) -> impl IntoView {
    let pharmacies = RwSignal::new(LoadState::<Vec<Pharmacy>>::Idle);
    let selection = RwSignal::new(Selection::new(kind));
    let (open, set_open) = signal(false);

    let caption = Memo::new(move |_| {
        let state = pharmacies.read();
        let entities = match &*state {
            LoadState::Ready(list) => list.as_slice(),
            _ => &[],
        };
        selection.read().caption(entities, placeholder)
    });

    let on_trigger = move |_| {
        set_open.update(|o| *o = !*o);
        if pharmacies.try_update(|s| s.begin()).unwrap_or(false) {
            spawn_local(async move {
                match api::list_pharmacies().await {
                    Ok(list) => pharmacies.update(|s| s.ready(list)),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error fetching pharmacies: {}", err).into(),
                        );
                        pharmacies.update(|s| s.fail());
                    }
                }
            });
        }
    };

    let input_type = match kind {
        SelectionKind::Single => "radio",
        SelectionKind::Multiple => "checkbox",
    };

    view! {
        <div class="dropdown">
            <button type="button" class="dropdown-toggle" on:click=on_trigger>
                {move || caption.get()}
            </button>
            // Clicks inside the panel stay inside: selecting an option must
            // not bubble out to handlers that would dismiss the panel
            <ul
                id=panel_id
                class="dropdown-menu"
                class:d-none=move || !open.get()
                on:click=|ev| ev.stop_propagation()
            >
                {move || match &*pharmacies.read() {
                    LoadState::Ready(list) if list.is_empty() => {
                        view! { <li class="dropdown-item-text">"No pharmacies found"</li> }
                            .into_any()
                    }
                    LoadState::Ready(list) => {
                        let list = list.clone();
                        view! {
                            <For
                                each=move || list.clone()
                                key=|p| p.id
                                children=move |pharmacy| {
                                    let id = pharmacy.id;
                                    view! {
                                        <li>
                                            <label>
                                                <input
                                                    type=input_type
                                                    name=input_name
                                                    value=id.to_string()
                                                    prop:checked=move || selection.read().contains(id)
                                                    on:change=move |ev| {
                                                        let checked = ev
                                                            .target()
                                                            .and_then(|t| {
                                                                t.dyn_into::<web_sys::HtmlInputElement>().ok()
                                                            })
                                                            .map(|input| input.checked())
                                                            .unwrap_or(false);
                                                        selection.update(|s| s.set_checked(id, checked));
                                                    }
                                                />
                                                {pharmacy.name.clone()}
                                            </label>
                                        </li>
                                    }
                                }
                            />
                        }
                        .into_any()
                    }
                    // Idle, Loading and Failed all leave the panel unrendered
                    _ => ().into_any(),
                }}
            </ul>
        </div>
    }
}
