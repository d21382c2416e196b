//! Pharmacy Submenu Navigator
//!
//! Sidebar tree of pharmacies. The top-level list is fetched lazily when the
//! "Pharmacies" group is first expanded; each pharmacy row owns a child
//! submenu of fixed section links populated on its first expansion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Pharmacy, Section};
use crate::state::{ExpansionState, LoadState};
use crate::store::{load_content, use_app_store};

#[component]
pub fn PharmacyNav(
    /// When set, opening one pharmacy submenu closes its siblings. The served
    /// dashboard leaves pharmacy submenus independent, so this defaults off.
    #[prop(optional)]
    exclusive: bool,
) -> impl IntoView {
    let pharmacies = RwSignal::new(LoadState::<Vec<Pharmacy>>::Idle);
    let expansion = RwSignal::new(ExpansionState::<u32>::new(exclusive));
    let (open, set_open) = signal(false);

    let on_toggle = move |_| {
        set_open.update(|o| *o = !*o);
        if pharmacies.try_update(|s| s.begin()).unwrap_or(false) {
            spawn_local(async move {
                match api::list_pharmacies().await {
                    Ok(list) => pharmacies.update(|s| s.ready(list)),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Error loading pharmacies: {}", err).into(),
                        );
                        pharmacies.update(|s| s.fail());
                    }
                }
            });
        }
    };

    view! {
        <li class="nav-group">
            <a class="nav-link d-flex align-items-center" on:click=on_toggle>
                <i class="bi bi-capsule"></i>
                <span class="nav-text">"Pharmacies"</span>
                <i
                    class="bi bi-caret-right-fill ms-auto nav-text"
                    class:rotate-down=move || open.get()
                ></i>
            </a>
            <ul id="pharmacies-submenu" class="nav flex-column ms-3" class:d-none=move || !open.get()>
                {move || match &*pharmacies.read() {
                    LoadState::Loading => view! {
                        <li class="nav-item"><span class="nav-link">"Loading..."</span></li>
                    }
                    .into_any(),
                    LoadState::Failed => view! {
                        <li class="nav-item">
                            <span class="nav-link text-danger">"Error loading data"</span>
                        </li>
                    }
                    .into_any(),
                    LoadState::Ready(list) if list.is_empty() => view! {
                        <li class="nav-item"><span class="nav-link">"No pharmacies found"</span></li>
                    }
                    .into_any(),
                    LoadState::Ready(list) => {
                        let list = list.clone();
                        view! {
                            <For
                                each=move || list.clone()
                                key=|p| p.id
                                children=move |pharmacy| {
                                    view! { <PharmacyNode pharmacy=pharmacy expansion=expansion /> }
                                }
                            />
                        }
                        .into_any()
                    }
                    LoadState::Idle => ().into_any(),
                }}
            </ul>
        </li>
    }
}

/// One pharmacy row with its lazily populated section submenu.
#[component]
fn PharmacyNode(
    pharmacy: Pharmacy,
    expansion: RwSignal<ExpansionState<u32>>,
) -> impl IntoView {
    let store = use_app_store();
    // Child links exist only after the first expansion; later toggles flip
    // visibility without rebuilding them
    let (populated, set_populated) = signal(false);

    let id = pharmacy.id;
    let expanded = move || expansion.read().is_open(&id);
    let on_toggle = move |_| {
        expansion.update(|e| {
            e.toggle(id);
        });
        if !populated.get() {
            set_populated.set(true);
        }
    };

    view! {
        <li class="nav-item">
            <a class="nav-link d-flex align-items-center" on:click=on_toggle>
                <i class="bi bi-shop"></i>
                <span class="nav-text">{pharmacy.name.clone()}</span>
                <i
                    class="bi bi-caret-right-fill ms-auto nav-text"
                    class=("rotate-90", expanded)
                ></i>
            </a>
            <ul class="nav flex-column ms-3" class:d-none=move || !expanded()>
                <Show when=move || populated.get()>
                    {Section::ALL
                        .iter()
                        .map(|section| {
                            let section = *section;
                            view! {
                                <li class="nav-item">
                                    <a
                                        class="nav-link"
                                        on:click=move |_| load_content(store, id, section)
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </Show>
            </ul>
        </li>
    }
}
