//! Authentication UI module
//!
//! Client-side login state, the login overlay and the header user menu.

mod context;
mod login_form;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use login_form::LoginModal;
pub use user_menu::UserMenu;
