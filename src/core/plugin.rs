//! The plugin itself: owns the config document and the per-slot state
//! table, registers shop items at startup, and reacts to the callbacks the
//! host fires at it (item lifecycle, damage, disconnect, timer tick).
//!
//! Everything here runs on the host's main loop; callbacks never overlap,
//! so the state table needs no locking.

use crate::config::ShopConfig;
use crate::core::constants::{CATEGORY_LABEL, CATEGORY_NAME};
use crate::host::{DamageEvent, GameServer, HookOutcome, PlayerSlot};
use crate::regen::logic::{advance, record_damage, HealAction};
use crate::regen::types::PlayerRegenState;
use crate::shop::{ItemId, ShopApi, ToggleState};
use std::collections::HashMap;
use std::path::Path;

/// The health-regeneration shop plugin: one instance per loaded plugin,
/// alive for the whole session.
pub struct RegenPlugin {
    config: ShopConfig,
    states: HashMap<PlayerSlot, PlayerRegenState>,
}

impl RegenPlugin {
    pub fn new(config: ShopConfig) -> Self {
        Self {
            config,
            states: HashMap::new(),
        }
    }

    /// Builds the plugin from a config file path. A missing or unreadable
    /// file leaves the plugin loaded but inert.
    pub fn from_path(config_path: &Path) -> Self {
        Self::new(ShopConfig::load_or_empty(config_path))
    }

    /// One-time startup registration with the shop service: the category,
    /// then every listable config entry, sequentially. Returns how many
    /// items were registered. Must complete before any gameplay callback
    /// is dispatched.
    pub fn register_items(&self, shop: &mut dyn ShopApi) -> usize {
        if self.config.is_empty() {
            return 0;
        }

        shop.create_category(CATEGORY_NAME, CATEGORY_LABEL);

        let mut registered = 0;
        for (unique_name, listing) in self.config.entries() {
            let item_id = shop.add_item(
                unique_name,
                &listing.name,
                CATEGORY_NAME,
                listing.price,
                listing.sellprice,
                listing.duration,
            );
            tracing::debug!("registered {unique_name} as shop item {}", item_id.0);
            registered += 1;
        }
        registered
    }

    /// Shop callback: a player bought an item from our category.
    ///
    /// On a valid profile the player's state is created (or overwritten,
    /// when they already owned a regen item). On an invalid profile the
    /// purchase stands at the shop layer but no state is created; the
    /// player paid for nothing, which is the shop's bug to roll back, not
    /// ours to hide.
    pub fn on_item_buy(
        &mut self,
        slot: PlayerSlot,
        item_id: ItemId,
        unique_name: &str,
    ) -> HookOutcome {
        match self.config.regen_profile(unique_name) {
            Some(profile) => {
                self.states
                    .insert(slot, PlayerRegenState::new(profile, item_id));
            }
            None => {
                tracing::error!("{unique_name} has invalid or missing settings in config");
            }
        }
        HookOutcome::Continue
    }

    /// Shop callback: a player toggled an owned item. Enabling re-creates
    /// the state from the profile (silently a no-op when the profile is
    /// invalid); disabling behaves exactly like a sale.
    pub fn on_item_toggle(
        &mut self,
        slot: PlayerSlot,
        item_id: ItemId,
        unique_name: &str,
        state: ToggleState,
    ) -> HookOutcome {
        match state {
            ToggleState::Enabled => {
                if let Some(profile) = self.config.regen_profile(unique_name) {
                    self.states
                        .insert(slot, PlayerRegenState::new(profile, item_id));
                }
                HookOutcome::Continue
            }
            ToggleState::Disabled => self.on_item_sell(slot, item_id, unique_name),
        }
    }

    /// Shop callback: a player sold the item. Unconditional removal; safe
    /// when no state exists.
    pub fn on_item_sell(
        &mut self,
        slot: PlayerSlot,
        _item_id: ItemId,
        _unique_name: &str,
    ) -> HookOutcome {
        self.states.remove(&slot);
        HookOutcome::Continue
    }

    /// Damage listener: a positive hit on an equipped player activates
    /// their regen. Counters are left alone; state is never created here.
    pub fn on_player_hurt(&mut self, event: &DamageEvent) -> HookOutcome {
        if let Some(state) = self.states.get_mut(&event.victim) {
            record_damage(state, event.damage);
        }
        HookOutcome::Continue
    }

    /// Disconnect listener: the slot will be recycled, drop its state no
    /// matter what the item ownership looks like.
    pub fn on_player_disconnect(&mut self, slot: PlayerSlot) {
        self.states.remove(&slot);
    }

    /// Timer tick: advance every connected, alive, equipped, active player
    /// and apply whatever the state machine decided.
    pub fn on_tick(&mut self, server: &mut dyn GameServer) {
        for slot in server.connected_players() {
            if !server.is_alive(slot) {
                continue;
            }
            let Some(state) = self.states.get_mut(&slot) else {
                continue;
            };
            if !state.is_active {
                continue;
            }

            match advance(state, server.health(slot)) {
                HealAction::Wait | HealAction::Deactivate => {}
                HealAction::SetHealth {
                    value,
                    fully_healed,
                } => {
                    server.set_health(slot, value);
                    if fully_healed {
                        tracing::debug!("player {} healed back to full", slot.0);
                    }
                }
            }
        }
    }

    /// Current regen state of a slot, if any.
    pub fn regen_state(&self, slot: PlayerSlot) -> Option<&PlayerRegenState> {
        self.states.get(&slot)
    }

    /// Number of slots that currently hold a state (active or dormant).
    pub fn equipped_count(&self) -> usize {
        self.states.len()
    }
}
