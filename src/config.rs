//! Shop configuration document.
//!
//! The config is a single JSON object mapping unique item names to entries:
//!
//! ```json
//! {
//!     "regen_small": {
//!         "name": "Lesser Regeneration",
//!         "price": 500,
//!         "sellprice": 250,
//!         "duration": 0,
//!         "health": 5,
//!         "delay": 2,
//!         "interval": 3
//!     }
//! }
//! ```
//!
//! Parsing is deliberately lenient at the document level (unknown keys and
//! non-object values are tolerated) and strict at the entry level: a regen
//! profile only exists when all three of `health`, `delay`, `interval` are
//! present and numeric.

use crate::regen::types::RegenProfile;
use crate::shop::ItemListing;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Parsed shop config document, loaded once at startup and read-only after.
#[derive(Debug, Clone, Default)]
pub struct ShopConfig {
    root: Map<String, Value>,
}

impl ShopConfig {
    /// Parses a config document from JSON text.
    ///
    /// Returns `InvalidData` if the text is not valid JSON or the root is
    /// not an object.
    pub fn from_json(text: &str) -> io::Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "shop config root must be a JSON object",
            )),
        }
    }

    /// Loads the config document from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Loads the config document, degrading to an empty one when the file
    /// is missing or unreadable. With an empty document the plugin stays
    /// loaded but registers nothing.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "shop config {} not found, no items will be registered",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!("failed to load shop config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Whether the document has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Iterates the entries that can be listed in the shop: object values
    /// carrying the full set of catalog fields. Anything else is skipped
    /// here but remains a lookup candidate for [`Self::regen_profile`].
    pub fn entries(&self) -> impl Iterator<Item = (&str, ItemListing)> + '_ {
        self.root.iter().filter_map(|(key, value)| {
            if !value.is_object() {
                return None;
            }
            match serde_json::from_value::<ItemListing>(value.clone()) {
                Ok(listing) => Some((key.as_str(), listing)),
                Err(e) => {
                    tracing::debug!("config entry {key} is not listable: {e}");
                    None
                }
            }
        })
    }

    /// Extracts the regen profile of one entry by exact key match.
    ///
    /// `None` when the key is absent, the value is not an object, or any of
    /// the three regen fields is missing, null, or not a valid count.
    pub fn regen_profile(&self, unique_name: &str) -> Option<RegenProfile> {
        let value = self.root.get(unique_name)?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
