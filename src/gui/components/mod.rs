// src/gui/components/mod.rs
pub mod chart;
pub mod filter_panel;
pub mod stats_table;
