//! Utility modules for the CliniDS application.
//!
//! - [`color`] - Hex parsing and the named palette used by component styles
//! - [`text`] - Case-insensitive matching, truncation, initials and wrap heights

pub mod color;
pub mod text;
