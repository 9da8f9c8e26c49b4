//! Plugin wiring and shared constants.

pub mod constants;
pub mod plugin;

pub use constants::*;
pub use plugin::*;
