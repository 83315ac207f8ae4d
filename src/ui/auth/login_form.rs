//! Login overlay
//!
//! Email/password form inside `#login-modal`. Validation, storage and
//! feedback happen in [`AuthContext::login`](super::AuthContext::login).

use leptos::prelude::*;

use super::context::use_auth_context;
use crate::ui::common::Overlay;

/// Login form rendered in the login overlay
#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    let reset_form = move || {
        email.set(String::new());
        password.set(String::new());
        remember.set(false);
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let logged_in = auth.login(
            &email.get_untracked(),
            &password.get_untracked(),
            remember.get_untracked(),
        );
        if logged_in {
            reset_form();
        }
    };

    view! {
        <Overlay
            id="login-modal"
            is_open=auth.login_modal_open.into()
            on_close=Callback::new(move |_| auth.close_login_modal())
        >
            <button
                type="button"
                class="modal-close"
                aria-label="Close"
                on:click=move |_| auth.close_login_modal()
            >
                "×"
            </button>

            <h2 class="modal-title">"Welcome Back"</h2>
            <p class="modal-subtitle">"Sign in to your Saki-Doruma account"</p>

            <form id="login-form" class="login-form" on:submit=on_submit novalidate>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-check">
                    <input
                        type="checkbox"
                        id="remember"
                        name="remember"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    <label for="remember">"Remember me"</label>
                </div>

                <button type="submit" class="btn btn-primary btn-block">
                    "Sign In"
                </button>
            </form>
        </Overlay>
    }
}
