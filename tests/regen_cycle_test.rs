//! Behavior-locking tests for the regen tick cycle: delay/interval
//! counting, heal clamping, deactivation, and the defensive paths around
//! dead or missing bodies.

use shop_regen::simulator::SimServer;
use shop_regen::{DamageEvent, ItemId, PlayerSlot, RegenPlugin, ShopConfig};

const CONFIG: &str = r#"
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
    "regen_instant": {
        "name": "Instant Regeneration",
        "price": 1000,
        "sellprice": 500,
        "duration": 0,
        "health": 10,
        "delay": 0,
        "interval": 0
    }
}
"#;

const SLOT: PlayerSlot = PlayerSlot(1);

fn setup(item: &str, health: u32, max_health: u32) -> (RegenPlugin, SimServer) {
    let mut plugin = RegenPlugin::new(ShopConfig::from_json(CONFIG).unwrap());
    let mut server = SimServer::new();
    server.add_player(SLOT, health, max_health);
    plugin.on_item_buy(SLOT, ItemId(1), item);
    (plugin, server)
}

fn hit(plugin: &mut RegenPlugin, damage: i32) {
    plugin.on_player_hurt(&DamageEvent {
        victim: SLOT,
        damage,
    });
}

#[test]
fn full_cycle_timeline_with_delay_and_interval() {
    // {health: 5, delay: 2, interval: 3}, player at 80/100, hit at t0.
    let (mut plugin, mut server) = setup("regen_small", 80, 100);
    hit(&mut plugin, 20);

    // Ticks 1-2: the one-time delay counts down, no healing.
    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(80));
    assert_eq!(plugin.regen_state(SLOT).unwrap().delay_remaining, 1);

    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(80));
    let state = plugin.regen_state(SLOT).unwrap();
    assert_eq!(state.delay_remaining, 0);
    // Delay expiry starts the interval countdown.
    assert_eq!(state.interval_remaining, 3);

    // Ticks 3-5: interval counts 3 -> 2 -> 1 -> 0, still no healing.
    for expected in [2, 1, 0] {
        plugin.on_tick(&mut server);
        assert_eq!(server.health_of(SLOT), Some(80));
        assert_eq!(
            plugin.regen_state(SLOT).unwrap().interval_remaining,
            expected
        );
    }

    // Tick 6: first heal, interval restarts, regen stays active.
    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(85));
    let state = plugin.regen_state(SLOT).unwrap();
    assert!(state.is_active);
    assert_eq!(state.interval_remaining, 3);

    // Heals land every 4 ticks from here: 90, 95, then exactly 100.
    for expected in [90, 95, 100] {
        for _ in 0..4 {
            plugin.on_tick(&mut server);
        }
        assert_eq!(server.health_of(SLOT), Some(expected));
    }
    assert!(!plugin.regen_state(SLOT).unwrap().is_active);
}

#[test]
fn heal_clamps_to_exact_max_health() {
    // 98/100 with +10 per heal and exhausted counters: one tick heals to
    // exactly 100, never 108, and the cycle ends.
    let (mut plugin, mut server) = setup("regen_instant", 98, 100);
    hit(&mut plugin, 2);

    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(100));
    assert!(!plugin.regen_state(SLOT).unwrap().is_active);
    // Exactly one health write, carrying the clamped value.
    assert_eq!(server.health_writes, vec![(SLOT, 100)]);
}

#[test]
fn overshoot_from_95_heals_to_100() {
    let (mut plugin, mut server) = setup("regen_instant", 95, 100);
    hit(&mut plugin, 5);

    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(100));
}

#[test]
fn zero_damage_never_activates() {
    let (mut plugin, mut server) = setup("regen_instant", 50, 100);
    hit(&mut plugin, 0);
    hit(&mut plugin, -10);

    assert!(!plugin.regen_state(SLOT).unwrap().is_active);
    for _ in 0..5 {
        plugin.on_tick(&mut server);
    }
    assert_eq!(server.health_of(SLOT), Some(50));
    assert!(server.health_writes.is_empty());
}

#[test]
fn already_full_player_deactivates_without_heal() {
    let (mut plugin, mut server) = setup("regen_instant", 100, 100);
    hit(&mut plugin, 1);
    assert!(plugin.regen_state(SLOT).unwrap().is_active);

    plugin.on_tick(&mut server);
    assert!(!plugin.regen_state(SLOT).unwrap().is_active);
    assert!(server.health_writes.is_empty());
}

#[test]
fn dead_player_is_skipped_with_counters_frozen() {
    let (mut plugin, mut server) = setup("regen_small", 60, 100);
    hit(&mut plugin, 40);
    server.set_alive(SLOT, false);

    for _ in 0..10 {
        plugin.on_tick(&mut server);
    }
    let state = plugin.regen_state(SLOT).unwrap();
    assert!(state.is_active);
    assert_eq!(state.delay_remaining, 2);
    assert_eq!(server.health_of(SLOT), Some(60));

    // Back alive, the cycle picks up where it stopped.
    server.set_alive(SLOT, true);
    plugin.on_tick(&mut server);
    assert_eq!(plugin.regen_state(SLOT).unwrap().delay_remaining, 1);
}

#[test]
fn missing_body_clears_the_active_flag() {
    let (mut plugin, mut server) = setup("regen_instant", 60, 100);
    hit(&mut plugin, 40);
    server.set_body_missing(SLOT, true);

    plugin.on_tick(&mut server);
    let state = plugin.regen_state(SLOT).unwrap();
    assert!(!state.is_active);
    assert!(server.health_writes.is_empty());

    // The state survives; only the cycle was cancelled. A later hit with a
    // restored body heals again.
    server.set_body_missing(SLOT, false);
    hit(&mut plugin, 5);
    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(70));
}

#[test]
fn reactivation_after_full_heal_skips_the_delay() {
    let (mut plugin, mut server) = setup("regen_small", 96, 100);
    hit(&mut plugin, 4);

    // First cycle: 2 delay ticks + 3 interval ticks + the healing tick.
    for _ in 0..6 {
        plugin.on_tick(&mut server);
    }
    assert_eq!(server.health_of(SLOT), Some(100));
    assert!(!plugin.regen_state(SLOT).unwrap().is_active);

    // Second hit: the one-time delay was already consumed, and both
    // counters sit at zero, so the next tick heals immediately.
    server.apply_damage(SLOT, 10);
    hit(&mut plugin, 10);
    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(95));
}

#[test]
fn only_active_players_heal() {
    let other = PlayerSlot(2);
    let (mut plugin, mut server) = setup("regen_instant", 40, 100);
    server.add_player(other, 70, 100);
    plugin.on_item_buy(other, ItemId(2), "regen_instant");

    // Only the first player takes a hit.
    hit(&mut plugin, 60);

    plugin.on_tick(&mut server);
    assert_eq!(server.health_of(SLOT), Some(50));
    assert_eq!(server.health_of(other), Some(70));
    assert!(!plugin.regen_state(other).unwrap().is_active);
}
