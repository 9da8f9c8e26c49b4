//! Narrow interface to the host game engine.
//!
//! The plugin never talks to the engine directly: everything it needs
//! (roster, liveness, health access) comes through the [`GameServer`] trait,
//! and everything the engine tells it arrives as an event struct plus a
//! method call on the plugin. The host runtime drives all of it from one
//! logical thread, so none of this is `Send`/`Sync`-constrained.

/// Session-stable slot number the host assigns to a connected player.
///
/// Slots are recycled after a disconnect, which is why disconnect handling
/// must clear any per-slot state before the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerSlot(pub u32);

/// A player's current and maximum health as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub current: u32,
    pub max: u32,
}

/// A damage event observed on the host's event bus.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Slot of the player who took the hit.
    pub victim: PlayerSlot,
    /// Health damage dealt. Events with a non-positive amount do occur
    /// (self-inflicted no-ops, shield absorbs) and must be ignored.
    pub damage: i32,
}

/// Return convention for host-driven callbacks: whether the plugin consumed
/// the event or the host should keep dispatching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Let the host continue dispatching to other listeners.
    Continue,
    /// The event was fully handled here.
    Handled,
}

/// What the plugin consumes from the game engine.
///
/// Implementations are expected to be cheap per call; the tick driver calls
/// into this once per connected player per second.
pub trait GameServer {
    /// Slots of all currently connected players.
    fn connected_players(&self) -> Vec<PlayerSlot>;

    /// Whether the player has a valid, alive body. Players failing this
    /// check are skipped by the tick driver with their state untouched.
    fn is_alive(&self, slot: PlayerSlot) -> bool;

    /// Health of the player's body, or `None` when the entity data is
    /// unavailable (despawning race, bot cleanup).
    fn health(&self, slot: PlayerSlot) -> Option<HealthSnapshot>;

    /// Write a new health value. Implementations own the engine's
    /// "state changed" notification; callers issue exactly one call per
    /// heal and never write values above the player's max health.
    fn set_health(&mut self, slot: PlayerSlot, value: u32);
}
