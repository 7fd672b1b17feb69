// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod notifier;

pub use app::run;
