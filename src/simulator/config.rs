//! Scenario configuration.

/// Built-in shop config used when the simulator is not pointed at a file.
pub const SAMPLE_SHOP_CONFIG: &str = r#"
{
    "regen_small": {
        "name": "Lesser Regeneration",
        "price": 500,
        "sellprice": 250,
        "duration": 0,
        "health": 5,
        "delay": 2,
        "interval": 3
    },
    "regen_large": {
        "name": "Greater Regeneration",
        "price": 2000,
        "sellprice": 1000,
        "duration": 604800,
        "health": 10,
        "delay": 1,
        "interval": 1
    }
}
"#;

/// Configuration for one scenario run: a single player buys `item`, takes
/// one hit, and the plugin ticks until `ticks` have elapsed.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Unique config key of the item to buy.
    pub item: String,

    /// Total timer ticks to simulate.
    pub ticks: u64,

    /// The player's max (and starting) health.
    pub max_health: u32,

    /// Damage dealt by the one scripted hit.
    pub damage: i32,

    /// Tick index at which the hit lands (before that tick runs).
    pub damage_tick: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            item: "regen_small".to_string(),
            ticks: 40,
            max_health: 100,
            damage: 40,
            damage_tick: 0,
        }
    }
}
