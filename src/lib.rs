// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod sheet;
pub mod source;
pub mod store;

pub mod normalize;
pub mod summary;

pub mod data;
pub mod file;
pub mod load;
pub mod progress;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
