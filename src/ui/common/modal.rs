use leptos::prelude::*;

/// Overlay shown by toggling the `active` class.
///
/// Clicking the backdrop itself closes it; clicks inside the content do not.
#[component]
pub fn Overlay(
    /// DOM id of the overlay element
    id: &'static str,
    /// Whether overlay is open
    is_open: Signal<bool>,
    /// Callback to close overlay
    on_close: Callback<()>,
    /// Overlay content
    children: Children,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            id=id
            class="modal"
            class:active=move || is_open.get()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if e.target().is_some() && e.target() == e.current_target() {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = (e, on_close);
                }
            }
        >
            <div class="modal-content">
                {children()}
            </div>
        </div>
    }
}

/// Confirmation dialog modal
#[component]
pub fn ConfirmDialog(
    /// DOM id of the dialog overlay
    id: &'static str,
    /// Dialog message
    message: String,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when confirmed
    on_confirm: Callback<()>,
    /// Callback when cancelled
    on_cancel: Callback<()>,
    /// Confirm button text
    #[prop(default = "Confirm".to_string())]
    confirm_text: String,
    /// Cancel button text
    #[prop(default = "Cancel".to_string())]
    cancel_text: String,
) -> impl IntoView {
    view! {
        <Overlay id=id is_open=is_open on_close=on_cancel>
            <div class="confirm-dialog">
                <p class="confirm-message">{message}</p>

                <div class="confirm-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        {cancel_text.clone()}
                    </button>
                    <button
                        type="button"
                        class="btn btn-primary"
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_text.clone()}
                    </button>
                </div>
            </div>
        </Overlay>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_renders_closed_on_server() {
        let owner = Owner::new();
        owner.set();

        let html = view! {
            <Overlay
                id="login-modal"
                is_open=Signal::stored(false)
                on_close=Callback::new(|_| {})
            >
                <p>"Sign in"</p>
            </Overlay>
        }
        .to_html();

        assert!(html.contains(r#"id="login-modal""#));
        assert!(html.contains("modal-content"));
        assert!(!html.contains("active"));
    }
}
