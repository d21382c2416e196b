//! Scroll-To-Top Button
//!
//! Appears once the window has scrolled past a threshold and smooth-scrolls
//! back to the top when clicked.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const SHOW_AFTER_PX: f64 = 100.0;

#[component]
pub fn ScrollTop() -> impl IntoView {
    let (active, set_active) = signal(false);

    // The listener lives for the app lifetime, like the rest of the shell
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let past_threshold = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .map(|y| y > SHOW_AFTER_PX)
                .unwrap_or(false);
            set_active.set(past_threshold);
        });
        if window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::error_1(&"Failed to attach scroll listener".into());
        }
        on_scroll.forget();
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <a
            href="#"
            class="scroll-top d-flex align-items-center justify-content-center"
            class:active=move || active.get()
            on:click=on_click
        >
            <i class="bi bi-arrow-up-short"></i>
        </a>
    }
}
