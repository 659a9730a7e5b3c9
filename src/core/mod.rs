// src/core/mod.rs

pub mod a1;
pub mod cell;
pub mod net;
pub mod sanitize;

pub use a1::{CellRef, Col};
pub use cell::Cell;
