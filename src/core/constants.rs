// Plugin identity
pub const PLUGIN_NAME: &str = "Shop Health Regeneration";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

// Shop category the items are registered under
pub const CATEGORY_NAME: &str = "HealthRegen";
pub const CATEGORY_LABEL: &str = "Health Regeneration";

// Cadence the host is expected to drive the tick at. The repeating timer is
// owned by the host and stops on map change; all counters in this crate are
// denominated in these ticks.
pub const TICK_INTERVAL_SECONDS: f64 = 1.0;
