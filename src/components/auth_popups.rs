//! Login / Signup Popups
//!
//! Header buttons that open the login and signup boxes. Reopening a box
//! replays its entry animation by dropping and re-adding the `animate` class
//! after a short delay; a transparent overlay closes the box on an outside
//! click. Field validation is the browser's (`required` attributes).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AuthPopups() -> impl IntoView {
    let (login_open, set_login_open) = signal(false);
    let (signup_open, set_signup_open) = signal(false);
    let (animate, set_animate) = signal(false);

    let replay_animation = move || {
        set_animate.set(false);
        spawn_local(async move {
            // Let the class removal hit the DOM before re-adding it, so the
            // transition restarts on every open
            TimeoutFuture::new(10).await;
            set_animate.set(true);
        });
    };

    let show_login = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        set_signup_open.set(false);
        set_login_open.set(true);
        replay_animation();
    };

    let show_signup = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        set_login_open.set(false);
        set_signup_open.set(true);
        replay_animation();
    };

    let close_all = move |_| {
        set_login_open.set(false);
        set_signup_open.set(false);
    };

    view! {
        <div class="auth-links">
            <a href="#" id="show-login" on:click=show_login>"Login"</a>
            <a href="#" id="show-signup" on:click=show_signup>"Sign Up"</a>

            <Show when=move || login_open.get() || signup_open.get()>
                <div class="auth-overlay" on:click=close_all></div>
            </Show>

            <div
                id="login-box"
                class:animate=move || animate.get()
                class:d-none=move || !login_open.get()
                on:click=|ev| ev.stop_propagation()
            >
                <form id="login-form" method="post" action="/accounts/login/">
                    <h4>"Login"</h4>
                    <input type="text" name="username" placeholder="Username" required=true />
                    <input type="password" name="password" placeholder="Password" required=true />
                    <button type="submit">"Login"</button>
                </form>
            </div>

            <div
                id="signup-box"
                class:animate=move || animate.get()
                class:d-none=move || !signup_open.get()
                on:click=|ev| ev.stop_propagation()
            >
                <form id="signup-form" method="post" action="/accounts/signup/">
                    <h4>"Sign Up"</h4>
                    <input type="text" name="username" placeholder="Username" required=true />
                    <input type="email" name="email" placeholder="Email" required=true />
                    <input type="password" name="password1" placeholder="Password" required=true />
                    <input type="password" name="password2" placeholder="Confirm password" required=true />
                    <button type="submit">"Sign Up"</button>
                </form>
            </div>
        </div>
    }
}
