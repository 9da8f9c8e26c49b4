//! Shop health regeneration plugin.
//!
//! Sells a "health regeneration" item through an external shop service and,
//! while an owner is wounded, periodically restores their health on the
//! host's one-second timer. The host engine and the shop service are both
//! behind narrow traits ([`GameServer`], [`ShopApi`]), so the whole plugin
//! runs unchanged against the real host or the in-memory simulator.

pub mod config;
pub mod core;
pub mod host;
pub mod regen;
pub mod shop;
pub mod simulator;

pub use crate::core::constants::TICK_INTERVAL_SECONDS;
pub use crate::core::plugin::RegenPlugin;
pub use config::ShopConfig;
pub use host::{DamageEvent, GameServer, HealthSnapshot, HookOutcome, PlayerSlot};
pub use regen::{PlayerRegenState, RegenProfile};
pub use shop::{ItemId, ItemListing, ShopApi, ToggleState};
