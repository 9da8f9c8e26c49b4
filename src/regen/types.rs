//! Regen data structures.

use crate::shop::ItemId;
use serde::Deserialize;

/// Regeneration parameters of one shop item, extracted from its config
/// entry at purchase time.
///
/// All three fields must be present and non-null in the config for the
/// entry to count as a valid profile; a partial entry is an error, not a
/// default-fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RegenProfile {
    /// Health restored per completed heal cycle.
    pub health: u32,
    /// Ticks to wait after the first activation before healing starts.
    /// Applies once per equip, not once per activation.
    pub delay: u32,
    /// Ticks between subsequent heals while below max health.
    pub interval: u32,
}

/// Per-player regeneration state, one per occupied slot.
///
/// Created on purchase or toggle-on, removed on sale, toggle-off, or
/// disconnect. Counters only ever decrement while positive.
#[derive(Debug, Clone)]
pub struct PlayerRegenState {
    pub profile: RegenProfile,
    /// Shop identifier of the item that granted this state.
    pub item_id: ItemId,
    /// Set by the damage listener, cleared when the player is healed back
    /// to full (or their body goes away).
    pub is_active: bool,
    pub delay_remaining: u32,
    pub interval_remaining: u32,
}

impl PlayerRegenState {
    /// Fresh dormant state. The delay counter starts at the profile value;
    /// the interval counter is seeded later, when the delay expires.
    pub fn new(profile: RegenProfile, item_id: ItemId) -> Self {
        Self {
            profile,
            item_id,
            is_active: false,
            delay_remaining: profile.delay,
            interval_remaining: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_dormant_with_seeded_delay() {
        let profile = RegenProfile {
            health: 5,
            delay: 2,
            interval: 3,
        };
        let state = PlayerRegenState::new(profile, ItemId(7));

        assert!(!state.is_active);
        assert_eq!(state.delay_remaining, 2);
        assert_eq!(state.interval_remaining, 0);
        assert_eq!(state.item_id, ItemId(7));
    }

    #[test]
    fn profile_rejects_missing_or_null_fields() {
        let missing: Result<RegenProfile, _> =
            serde_json::from_str(r#"{"health": 5, "delay": 2}"#);
        assert!(missing.is_err());

        let null: Result<RegenProfile, _> =
            serde_json::from_str(r#"{"health": 5, "delay": 2, "interval": null}"#);
        assert!(null.is_err());
    }

    #[test]
    fn profile_ignores_catalog_fields() {
        let profile: RegenProfile = serde_json::from_str(
            r#"{"name": "Regen I", "price": 100, "health": 5, "delay": 2, "interval": 3}"#,
        )
        .unwrap();
        assert_eq!(
            profile,
            RegenProfile {
                health: 5,
                delay: 2,
                interval: 3
            }
        );
    }
}
