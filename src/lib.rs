// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;

pub mod csv;
pub mod file;
pub mod filter;
pub mod gui;
pub mod params;
pub mod reconcile;
pub mod records;
pub mod scales;
pub mod store;
