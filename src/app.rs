//! Fylinx Dashboard App
//!
//! Root layout: top bar, sidebar navigation and the content region.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContentArea, ScrollTop, Sidebar, TopBar};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    view! {
        <div class="dashboard-layout">
            <TopBar />
            <div class="dashboard-body">
                <Sidebar />
                <ContentArea />
            </div>
            <ScrollTop />
        </div>
    }
}
