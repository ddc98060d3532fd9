//! Configuration storage.
//!
//! Reads settings from a JSON file in %APPDATA%/Compositing/config.json

mod config;

pub use config::*;
