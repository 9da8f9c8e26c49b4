//! In-memory shop/server doubles and the scenario runner.

use super::config::SimConfig;
use super::report::SimReport;
use crate::config::ShopConfig;
use crate::core::plugin::RegenPlugin;
use crate::host::{DamageEvent, GameServer, HealthSnapshot, PlayerSlot};
use crate::shop::{ItemId, ShopApi};
use std::collections::HashMap;

/// Record of one `add_item` registration.
#[derive(Debug, Clone)]
pub struct RegisteredItem {
    pub id: ItemId,
    pub unique_name: String,
    pub label: String,
    pub category: String,
    pub price: i64,
    pub sell_price: i64,
    pub duration: i64,
}

/// Shop service double: hands out sequential item ids and remembers what
/// was registered.
#[derive(Debug, Default)]
pub struct SimShop {
    pub categories: Vec<(String, String)>,
    pub items: Vec<RegisteredItem>,
    next_id: u32,
}

impl SimShop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item id a unique name was registered under, if any.
    pub fn item_id(&self, unique_name: &str) -> Option<ItemId> {
        self.items
            .iter()
            .find(|item| item.unique_name == unique_name)
            .map(|item| item.id)
    }
}

impl ShopApi for SimShop {
    fn create_category(&mut self, name: &str, label: &str) {
        self.categories.push((name.to_string(), label.to_string()));
    }

    fn add_item(
        &mut self,
        unique_name: &str,
        label: &str,
        category: &str,
        price: i64,
        sell_price: i64,
        duration: i64,
    ) -> ItemId {
        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.push(RegisteredItem {
            id,
            unique_name: unique_name.to_string(),
            label: label.to_string(),
            category: category.to_string(),
            price,
            sell_price,
            duration,
        });
        id
    }
}

/// One simulated player body.
#[derive(Debug, Clone)]
pub struct SimPlayer {
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
    /// When set, the player stays on the roster but health reads fail,
    /// mimicking an entity whose body data is gone.
    pub body_missing: bool,
}

/// Game server double: a roster of simulated players.
#[derive(Debug, Default)]
pub struct SimServer {
    players: HashMap<PlayerSlot, SimPlayer>,
    /// Every `set_health` call in order, standing in for the engine's
    /// health write plus state-changed notification.
    pub health_writes: Vec<(PlayerSlot, u32)>,
}

impl SimServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, slot: PlayerSlot, health: u32, max_health: u32) {
        self.players.insert(
            slot,
            SimPlayer {
                health,
                max_health,
                alive: true,
                body_missing: false,
            },
        );
    }

    /// Disconnect: drop the player from the roster entirely.
    pub fn remove_player(&mut self, slot: PlayerSlot) {
        self.players.remove(&slot);
    }

    pub fn set_alive(&mut self, slot: PlayerSlot, alive: bool) {
        if let Some(player) = self.players.get_mut(&slot) {
            player.alive = alive;
        }
    }

    pub fn set_body_missing(&mut self, slot: PlayerSlot, missing: bool) {
        if let Some(player) = self.players.get_mut(&slot) {
            player.body_missing = missing;
        }
    }

    pub fn health_of(&self, slot: PlayerSlot) -> Option<u32> {
        self.players.get(&slot).map(|player| player.health)
    }

    /// Deal a scripted hit to the body (the event itself is the caller's
    /// job to dispatch).
    pub fn apply_damage(&mut self, slot: PlayerSlot, damage: i32) {
        if damage <= 0 {
            return;
        }
        if let Some(player) = self.players.get_mut(&slot) {
            player.health = player.health.saturating_sub(damage as u32);
        }
    }
}

impl GameServer for SimServer {
    fn connected_players(&self) -> Vec<PlayerSlot> {
        let mut slots: Vec<PlayerSlot> = self.players.keys().copied().collect();
        slots.sort();
        slots
    }

    fn is_alive(&self, slot: PlayerSlot) -> bool {
        self.players.get(&slot).is_some_and(|player| player.alive)
    }

    fn health(&self, slot: PlayerSlot) -> Option<HealthSnapshot> {
        let player = self.players.get(&slot)?;
        if player.body_missing {
            return None;
        }
        Some(HealthSnapshot {
            current: player.health,
            max: player.max_health,
        })
    }

    fn set_health(&mut self, slot: PlayerSlot, value: u32) {
        if let Some(player) = self.players.get_mut(&slot) {
            player.health = value;
        }
        self.health_writes.push((slot, value));
    }
}

/// Run one scripted scenario: register, buy, hit once, tick to the end.
pub fn run_scenario(config: &ShopConfig, sim: &SimConfig) -> SimReport {
    let mut plugin = RegenPlugin::new(config.clone());
    let mut shop = SimShop::new();
    let items_registered = plugin.register_items(&mut shop);

    let slot = PlayerSlot(1);
    let mut server = SimServer::new();
    server.add_player(slot, sim.max_health, sim.max_health);

    // Unlisted items still get a buy attempt; the plugin decides whether a
    // profile exists for them.
    let item_id = shop.item_id(&sim.item).unwrap_or(ItemId(0));
    plugin.on_item_buy(slot, item_id, &sim.item);

    let mut timeline = Vec::with_capacity(sim.ticks as usize + 1);
    timeline.push(server.health_of(slot).unwrap_or(0));

    for tick in 0..sim.ticks {
        if tick == sim.damage_tick {
            server.apply_damage(slot, sim.damage);
            plugin.on_player_hurt(&DamageEvent {
                victim: slot,
                damage: sim.damage,
            });
        }
        plugin.on_tick(&mut server);
        timeline.push(server.health_of(slot).unwrap_or(0));
    }

    SimReport {
        item: sim.item.clone(),
        items_registered,
        max_health: sim.max_health,
        damage_tick: sim.damage_tick,
        timeline,
    }
}
