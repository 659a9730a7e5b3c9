// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod logo;
pub mod pages;
pub mod progress;
pub mod router;

pub use app::run;
