//! Core UI building blocks for CliniDS.
//!
//! # Module Components
//!
//! - [`actions`] - Pages, navigation sections and the [`Action`] enum
//! - [`component`] - Base component trait
//! - [`context`] - Shared render context (language, icons, logger)
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`pointer`] - Outside-click subscriptions for popups
//!
//! Components implement [`Component`], turn input into [`Action`]s and hand
//! them back up the tree; the app component applies them and re-renders.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod pointer;

pub use actions::{Action, DialogType, NavSection, Page};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use pointer::{OutsideClickGuard, PointerWatch};
