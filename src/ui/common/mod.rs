//! Reusable UI pieces shared by the page components

pub mod modal;

pub use modal::{ConfirmDialog, Overlay};
