// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod header;
pub mod search_bar;
pub mod source_bar;
pub mod summary_cards;
pub mod tabs;
