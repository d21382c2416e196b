//! Top Bar
//!
//! Brand, mobile nav toggle and the auth popups.

use leptos::prelude::*;

use crate::components::AuthPopups;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_app_store();
    let mobile_open = move || store.mobile_nav_open().get();

    // Keep the body class in sync so the stylesheet can slide the nav in
    Effect::new(move |_| {
        let open = store.mobile_nav_open().get();
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let result = if open {
                body.class_list().add_1("mobile-nav-active")
            } else {
                body.class_list().remove_1("mobile-nav-active")
            };
            if result.is_err() {
                web_sys::console::error_1(&"Failed to toggle mobile nav class".into());
            }
        }
    });

    view! {
        <header class="top-bar">
            <span class="brand">"Fylinx"</span>
            <button
                class="mobile-nav-toggle d-xl-none bi"
                class:bi-list=move || !mobile_open()
                class:bi-x=mobile_open
                on:click=move |_| store.mobile_nav_open().update(|o| *o = !*o)
            ></button>
            <AuthPopups />
        </header>
    }
}
