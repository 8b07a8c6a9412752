use crate::kinds;
use enchant_core::{Enchantment, EntityId, HookResult, HookSet, Hooks, Kind};
use serde::{Deserialize, Serialize};

/// Flat addition to a harvester's bonus roll.
///
/// On a tool, a positive value also marks the tool as enchanted for the
/// tool bonus roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestBonus {
    pub value: i32,
}

impl Hooks for HarvestBonus {
    fn on_harvest_bonus(&self, _harvester: EntityId, bonus: &mut i32) -> HookResult {
        *bonus = bonus.saturating_add(self.value);
        Ok(())
    }
}

impl Enchantment for HarvestBonus {
    const KIND: Kind = kinds::HARVEST_BONUS;
    const HOOKS: HookSet = HookSet::HARVEST_BONUS;
}

/// Percentage amplification of the bonus accumulated so far, plus a share
/// of the tool roll.
///
/// Runs after [`HarvestBonus`], so flat bonuses are amplified too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolHarvestBonus {
    pub percent: i32,
}

impl Hooks for ToolHarvestBonus {
    fn on_harvest_bonus(&self, _harvester: EntityId, bonus: &mut i32) -> HookResult {
        *bonus = bonus.saturating_add(bonus.saturating_mul(self.percent) / 100);
        Ok(())
    }

    fn on_tool_harvest_bonus(&self, _harvester: EntityId, chance: &mut i32) -> HookResult {
        *chance = chance.saturating_add(self.percent / 25);
        Ok(())
    }
}

impl Enchantment for ToolHarvestBonus {
    const KIND: Kind = kinds::TOOL_HARVEST_BONUS;
    const HOOKS: HookSet = HookSet::HARVEST_BONUS.union(HookSet::TOOL_HARVEST_BONUS);
}
