//! Header auth area: login affordance or user menu
//!
//! Both blocks are always rendered and toggled with `display` so the
//! `#auth-menu` / `#user-menu` ids stay in the document in either state.

use leptos::prelude::*;

use super::context::use_auth_context;
use crate::ui::common::ConfirmDialog;

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    let auth_menu_style = move || {
        if auth.is_logged_in() {
            "display: none;"
        } else {
            "display: block;"
        }
    };
    let user_menu_style = move || {
        if auth.is_logged_in() {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    view! {
        <div id="auth-menu" class="auth-menu" style=auth_menu_style>
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| auth.open_login_modal()
            >
                "Login"
            </button>
        </div>

        <div id="user-menu" class="user-menu" style=user_menu_style>
            <span class="user-greeting">
                <span id="user-name">{move || auth.display_name().unwrap_or_default()}</span>
            </span>
            <button
                type="button"
                class="btn btn-secondary"
                on:click=move |_| auth.request_logout()
            >
                "Logout"
            </button>
        </div>

        <ConfirmDialog
            id="logout-confirm"
            message="Are you sure you want to log out?".to_string()
            is_open=auth.logout_confirm_open.into()
            on_confirm=Callback::new(move |_| auth.logout())
            on_cancel=Callback::new(move |_| auth.cancel_logout())
            confirm_text="Log out".to_string()
        />
    }
}
