//! Searchable single-select list with optional grouping, clearing and a
//! caller-owned (controlled) mode.
//!
//! - [`options`] - option data, filtering and grouping
//! - [`state`] - configuration, selection ownership and the open/close state machine
//! - `widget` - key, mouse and render handling

pub mod options;
pub mod state;
mod widget;

pub use options::{filter_options, group_options, ComboOption, OptionRow};
pub use state::{ChangeHandler, Combobox, ComboboxConfig, Selection, TriggerContent};
