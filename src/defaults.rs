//! Default constants for expansion-order and lag-grid estimation.

pub const DEFAULT_MAX_INPUT_LAG: usize = 15;
pub const DEFAULT_MAX_OUTPUT_LAG: usize = 15;
pub const DEFAULT_MAX_ORDER: usize = 5;
pub const DEFAULT_VARIANCE_ACCEPT_THRESHOLD: f64 = 0.98;
