use crate::kinds;
use enchant_core::{Enchantment, Hooks, Kind};
use serde::{Deserialize, Serialize};

/// Flat dexterity bonus. Carries no hooks; read through `get`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexBonus {
    pub value: i32,
}

impl Hooks for DexBonus {}

impl Enchantment for DexBonus {
    const KIND: Kind = kinds::DEX_BONUS;
}
