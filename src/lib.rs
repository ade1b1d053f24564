//! CliniDS - A terminal browser for the CliniDS design system
//!
//! This library renders the CliniDS documentation site in the terminal:
//! a sidebar of pages, live component demos (buttons, combobox, accordion,
//! dialogs and more) and the design tokens behind them, in English or
//! Portuguese. It is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`i18n`] - Bilingual copy for every page and widget
//! * [`tokens`] - Colour and typography design tokens
//! * [`ui`] - Terminal user interface components and pages
//! * [`utils`] - Utility functions and helpers

/// Command-line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// English and Portuguese translation tables
pub mod i18n;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Design tokens shown on the foundation pages
pub mod tokens;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colour and text handling
pub mod utils;
