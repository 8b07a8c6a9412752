//! Kind declarations for the stock enchantments
//!
//! Ids are slot indices and must stay unique; [`stock_registry`] checks that.
//! Ordering keys decide ordered dispatch: reductions run before bonuses.

use enchant_core::{Kind, KindRegistry, RegistryError};

pub const DEX_BONUS: Kind = Kind::new(1, "dex_bonus", 0);
pub const HARVEST_BONUS: Kind = Kind::new(2, "harvest_bonus", 1);
pub const TOOL_HARVEST_BONUS: Kind = Kind::new(3, "tool_harvest_bonus", 2);
pub const HEALING_BONUS: Kind = Kind::new(4, "healing_bonus", 10);
pub const PHYSICAL_RESIST: Kind = Kind::new(5, "physical_resist", 0);
pub const DAMAGE_AMPLIFY: Kind = Kind::new(6, "damage_amplify", 10);

/// Every stock kind
pub fn all() -> &'static [Kind] {
    &[
        DEX_BONUS,
        HARVEST_BONUS,
        TOOL_HARVEST_BONUS,
        HEALING_BONUS,
        PHYSICAL_RESIST,
        DAMAGE_AMPLIFY,
    ]
}

/// Registry holding every stock kind
pub fn stock_registry() -> Result<KindRegistry, RegistryError> {
    KindRegistry::from_kinds(all())
}
