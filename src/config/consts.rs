// src/config/consts.rs

// Data
pub const DATA_FILE: &str = "data/pl-tables-1993-2024.csv";

// Chart canvas
pub const CHART_W: f32 = 1000.0;
pub const CHART_H: f32 = 600.0;
pub const MARGIN_TOP: f32 = 40.0;
pub const MARGIN_RIGHT: f32 = 30.0;
pub const MARGIN_BOTTOM: f32 = 60.0;
pub const MARGIN_LEFT: f32 = 60.0;

// Bubbles
pub const RADIUS_MIN: f32 = 5.0;
pub const RADIUS_MAX: f32 = 40.0;
pub const BUBBLE_OPACITY: u8 = 204; // 0.8

// Transitions (seconds)
pub const DUR_EXIT: f32 = 0.3;
pub const DUR_ENTER_UPDATE: f32 = 0.5;

// Axis labels
pub const X_AXIS_TITLE: &str = "Goals Scored";
pub const Y_AXIS_TITLE: &str = "Goals Conceded";
