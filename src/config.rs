//! Application-level configuration constants.

// UI Behavior
pub const CALC_DELAY_MS: u32 = 2_000;
pub const COPIED_RESET_MS: u32 = 2_000;

// Hardware tiers offered by the form selects
pub const RAM_OPTIONS_GB: [u32; 7] = [2, 3, 4, 6, 8, 12, 16];
pub const STORAGE_OPTIONS_GB: [u32; 5] = [32, 64, 128, 256, 512];

// Default values for input fields
pub const DEFAULT_RAM_GB: u32 = 6;
pub const DEFAULT_STORAGE_GB: u32 = 128;
pub const DEFAULT_RAM_USAGE_PCT: u32 = 60;
pub const DEFAULT_FREE_STORAGE_GB: f64 = 15.0;
