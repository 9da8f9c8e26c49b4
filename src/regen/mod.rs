//! Health regeneration state machine.
//!
//! A [`PlayerRegenState`] exists while a player owns an enabled regen item;
//! it goes dormant on creation, activates when the player takes damage, and
//! counts down a one-time delay plus a repeating interval between heals.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
