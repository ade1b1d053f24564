//! Reusable UI components

// Presentational primitives
pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod button_group;
pub mod card;
pub mod combobox;

// Shell
pub mod dialog_component;
pub mod dialogs;
pub mod footer;
pub mod header;
pub mod scrollbar_helper;
pub mod sidebar_component;
pub mod status_bar;

// Component exports
pub use combobox::Combobox;
pub use dialog_component::DialogComponent;
pub use footer::Footer;
pub use header::HeaderComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
