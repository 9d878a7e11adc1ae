//! Core library components.
//!
//! Input resolution, configuration, the node client and account keys. The
//! CLI layer only parses arguments and prints; everything else lives here.

pub mod api;
pub mod config;
pub mod constants;
pub mod input;
pub mod keys;
pub mod source;
pub mod validation;
