//! Constants used throughout the application
//!
//! This module centralizes brand strings, layout bounds and other constant
//! values to keep them consistent between the shell and the pages.

// Brand
pub const BRAND_MARK: &str = "C";
pub const BRAND_NAME: &str = "CliniDS";
pub const BRAND_VERSION: &str = "v2.0";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "clinids.toml";
pub const APP_DIR_NAME: &str = "clinids";
pub const LOG_FILE_NAME: &str = "clinids.log";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 18;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 40;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 26;
/// Width of the collapsed (icon only) sidebar
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;
/// Header height in rows
pub const HEADER_HEIGHT: u16 = 3;
/// Footer height in rows
pub const FOOTER_HEIGHT: u16 = 3;

// Combobox
/// Rows of options shown before the popup starts scrolling
pub const COMBOBOX_MAX_VISIBLE_ROWS: usize = 8;
/// Default trigger width, mirrors the 200px default of the web component
pub const COMBOBOX_DEFAULT_WIDTH: u16 = 28;

// Avatar groups show this many avatars before collapsing into "+N"
pub const AVATAR_GROUP_DEFAULT_LIMIT: usize = 3;

// Event loop timing
pub const TICK_RATE_MS: u64 = 100;
