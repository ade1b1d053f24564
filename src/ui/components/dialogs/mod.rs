//! Dialog rendering helpers used by [`DialogComponent`](super::DialogComponent)

pub mod common;
pub mod confirm_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use confirm_dialog::{render_confirm_dialog, ConfirmContent};
pub use system_dialogs::{render_error_dialog, render_help_dialog, render_info_dialog, render_logs_dialog};
