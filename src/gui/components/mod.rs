// src/gui/components/mod.rs
pub mod dialogs;
pub mod profile_dialog;
pub mod results;
pub mod search_panel;
pub mod toolbar;
