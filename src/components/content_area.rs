//! Content Area
//!
//! Renders the current content region. Fragments arrive as server-rendered
//! HTML; the manager section additionally mounts the assignment forms, which
//! recreates their dropdown widgets with fresh state on every load.

use leptos::prelude::*;

use crate::components::PharmacyForms;
use crate::models::Section;
use crate::store::{use_app_store, AppStateStoreFields, ContentState};

#[component]
pub fn ContentArea() -> impl IntoView {
    let store = use_app_store();

    view! {
        <main id="content-area">
            {move || match store.content().get() {
                ContentState::Welcome => view! {
                    <div class="welcome-panel">
                        <h2>"Welcome"</h2>
                        <p>"Select a pharmacy from the sidebar to get started."</p>
                    </div>
                }
                .into_any(),
                ContentState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }
                .into_any(),
                ContentState::NotFound => view! {
                    <h3>"Page not found."</h3>
                }
                .into_any(),
                ContentState::Fragment { section, html, .. } => view! {
                    <div class="fragment" inner_html=html></div>
                    {(section == Section::Manager).then(|| view! { <PharmacyForms /> })}
                }
                .into_any(),
            }}
        </main>
    }
}
