//! Core domain types

pub mod settings;

pub use settings::{HttpServer, Settings};
