//! Narrow interface to the external shop service.
//!
//! The shop owns the economy: catalog, pricing, purchase persistence. This
//! plugin only registers a category plus its items and reacts to the
//! lifecycle callbacks the shop fires back (`buy`, `sell`, `toggle` on
//! [`crate::RegenPlugin`]). Registration happens once at startup, one item
//! at a time, before any gameplay callback can arrive.

use serde::Deserialize;

/// Identifier the shop service assigns to a registered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u32);

/// Catalog fields of one purchasable config entry.
///
/// Deserialized straight out of the shop config document; an entry missing
/// any of these fields is not listable (but may still carry a regen
/// profile, see [`crate::ShopConfig::regen_profile`]).
#[derive(Debug, Clone, Deserialize)]
pub struct ItemListing {
    /// Display name shown in the shop menu.
    pub name: String,
    /// Purchase price.
    pub price: i64,
    /// Refund amount on sale.
    pub sellprice: i64,
    /// Ownership duration in the shop's own units (0 = permanent).
    pub duration: i64,
}

/// Toggle direction reported by the shop when a player enables or disables
/// an owned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Enabled,
    Disabled,
}

/// What the plugin consumes from the shop service.
pub trait ShopApi {
    /// Register the category items will be listed under. Called at most
    /// once, before any `add_item`.
    fn create_category(&mut self, name: &str, label: &str);

    /// Register one purchasable item and return its shop identifier.
    fn add_item(
        &mut self,
        unique_name: &str,
        label: &str,
        category: &str,
        price: i64,
        sell_price: i64,
        duration: i64,
    ) -> ItemId;
}
