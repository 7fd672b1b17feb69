// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod sanitize;
pub mod csv;
pub mod error;
pub mod file;
pub mod filter;
pub mod gui;
pub mod handoff;
pub mod record;
pub mod render;
pub mod store;
pub mod upload;
pub mod validate;

pub use error::{Error, Result};
