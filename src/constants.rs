//! Crate-wide constants.
//!
//! Centralizes the zoom table and interaction tuning values so the
//! controller and the settings defaults agree on them.

// ============================================================================
// Zoom
// ============================================================================

/// Zoom percentages offered when no custom ledger is configured
pub const DEFAULT_ZOOM_LEVELS: [u32; 26] = [
    7, 10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100, 120, 130, 150, 180, 200, 250, 300, 400,
    500, 1000, 1500, 2200, 2400,
];

/// Zoom percentage at which one image pixel maps to one device pixel
pub const ACTUAL_SIZE_ZOOM: u32 = 100;

// ============================================================================
// Pointer Interaction
// ============================================================================

/// Pixels scrolled per wheel line when the wheel is not zooming
pub const DEFAULT_WHEEL_SCROLL_STEP: u32 = 20;

/// Pointer handler budget before the profiler warns (milliseconds)
pub const POINTER_HANDLER_BUDGET_MS: f64 = 2.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "zoombox";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
