//! UI module for CliniDS
//!
//! This module handles the documentation shell, the pages it hosts, the
//! widgets they demonstrate and the terminal event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod pages;
pub mod renderer;

pub use app_component::{AppComponent, AppState};
pub use layout::LayoutManager;
pub use renderer::{run_app, LaunchOptions};
