//! Headless scenario driver.
//!
//! Runs the plugin against in-memory stand-ins for the shop service and the
//! game server, producing a per-tick health timeline. The same stand-ins
//! back the integration tests, so simulator output and test behavior can
//! never drift apart.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SAMPLE_SHOP_CONFIG};
pub use report::SimReport;
pub use runner::{run_scenario, RegisteredItem, SimPlayer, SimServer, SimShop};
