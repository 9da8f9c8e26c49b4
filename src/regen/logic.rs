//! Per-player regen transitions, kept free of any host types so the state
//! machine is testable on its own.

use super::types::PlayerRegenState;
use crate::host::HealthSnapshot;

/// What the tick driver should do for a player after advancing their state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealAction {
    /// Still counting down, or dormant. No health access needed.
    Wait,
    /// Write this health value to the player's body.
    SetHealth {
        value: u32,
        /// True when the write brings the player to exactly max health and
        /// the cycle has ended.
        fully_healed: bool,
    },
    /// Regeneration stopped without a write: the player was already at (or
    /// above) max health, or their body was unavailable.
    Deactivate,
}

/// Mark the state active if the hit actually dealt damage.
/// Returns whether this call activated a previously dormant state.
pub fn record_damage(state: &mut PlayerRegenState, damage: i32) -> bool {
    if damage <= 0 {
        return false;
    }
    let was_dormant = !state.is_active;
    state.is_active = true;
    was_dormant
}

/// Advance one player by one tick.
///
/// Order matters: the delay counter shadows the interval counter, and a
/// heal only happens on a tick where both are already exhausted. The tick
/// that brings the delay to zero seeds the interval counter, so the first
/// heal lands a full interval after the delay expires. The delay is never
/// re-seeded here; only re-equipping resets it.
pub fn advance(state: &mut PlayerRegenState, health: Option<HealthSnapshot>) -> HealAction {
    if !state.is_active {
        return HealAction::Wait;
    }

    if state.delay_remaining > 0 {
        state.delay_remaining -= 1;
        if state.delay_remaining == 0 {
            state.interval_remaining = state.profile.interval;
        }
        return HealAction::Wait;
    }

    if state.interval_remaining > 0 {
        state.interval_remaining -= 1;
        return HealAction::Wait;
    }

    // Missing body data counts as nothing left to heal; clearing the flag
    // here keeps a despawned player from staying active forever.
    let Some(HealthSnapshot { current, max }) = health else {
        state.is_active = false;
        return HealAction::Deactivate;
    };

    if current >= max {
        state.is_active = false;
        return HealAction::Deactivate;
    }

    let healed = current.saturating_add(state.profile.health);
    if healed < max {
        state.interval_remaining = state.profile.interval;
        HealAction::SetHealth {
            value: healed,
            fully_healed: false,
        }
    } else {
        state.is_active = false;
        HealAction::SetHealth {
            value: max,
            fully_healed: true,
        }
    }
}
