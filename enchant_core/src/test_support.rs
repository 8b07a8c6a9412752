//! Small enchantments shared by the unit tests

use crate::enchantment::Enchantment;
use crate::entity::EntityId;
use crate::error::{HookError, HookResult};
use crate::hooks::{HookSet, Hooks};
use crate::kind::Kind;

#[derive(Debug, Clone, PartialEq)]
pub struct DexBonus {
    pub value: i32,
}

impl Hooks for DexBonus {}

impl Enchantment for DexBonus {
    const KIND: Kind = Kind::new(1, "dex_bonus", 0);
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrBonus {
    pub value: i32,
}

impl Hooks for StrBonus {}

impl Enchantment for StrBonus {
    const KIND: Kind = Kind::new(2, "str_bonus", 0);
}

/// Scales heals by `percent`
#[derive(Debug, Clone, PartialEq)]
pub struct Mending {
    pub percent: f64,
}

impl Hooks for Mending {
    fn on_heal(
        &self,
        _healer: EntityId,
        _patient: EntityId,
        _source: Option<EntityId>,
        amount: &mut f64,
    ) -> HookResult {
        *amount *= 1.0 + self.percent / 100.0;
        Ok(())
    }
}

impl Enchantment for Mending {
    const KIND: Kind = Kind::new(3, "mending", 5);
    const HOOKS: HookSet = HookSet::HEAL;
}

/// Appends its ordering key as a decimal digit: `bonus = bonus * 10 + ORDER`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyed<const ORDER: i32>;

impl<const ORDER: i32> Hooks for Keyed<ORDER> {
    fn on_harvest_bonus(&self, _harvester: EntityId, bonus: &mut i32) -> HookResult {
        *bonus = *bonus * 10 + ORDER;
        Ok(())
    }
}

impl<const ORDER: i32> Enchantment for Keyed<ORDER> {
    const KIND: Kind = Kind::new(100 + ORDER as u16, "keyed", ORDER);
    const HOOKS: HookSet = HookSet::HARVEST_BONUS;
}

/// Fails every harvest bonus it sees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brittle;

impl Hooks for Brittle {
    fn on_harvest_bonus(&self, _harvester: EntityId, _bonus: &mut i32) -> HookResult {
        Err(HookError::handler(Self::KIND, "shattered"))
    }
}

impl Enchantment for Brittle {
    const KIND: Kind = Kind::new(4, "brittle", 2);
    const HOOKS: HookSet = HookSet::HARVEST_BONUS;
}

/// Overrides a hook without declaring it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Undeclared;

impl Hooks for Undeclared {
    fn on_harvest_bonus(&self, _harvester: EntityId, bonus: &mut i32) -> HookResult {
        *bonus += 1000;
        Ok(())
    }
}

impl Enchantment for Undeclared {
    const KIND: Kind = Kind::new(5, "undeclared", 0);
}

/// Doubles harvest bonuses and adds 2 to tool chances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sharpened;

impl Hooks for Sharpened {
    fn on_harvest_bonus(&self, _harvester: EntityId, bonus: &mut i32) -> HookResult {
        *bonus *= 2;
        Ok(())
    }

    fn on_tool_harvest_bonus(&self, _harvester: EntityId, chance: &mut i32) -> HookResult {
        *chance += 2;
        Ok(())
    }
}

impl Enchantment for Sharpened {
    const KIND: Kind = Kind::new(6, "sharpened", 3);
    const HOOKS: HookSet = HookSet::HARVEST_BONUS.union(HookSet::TOOL_HARVEST_BONUS);
}

/// Reuses DexBonus's id under another name and ordering key
#[derive(Debug, Clone, PartialEq)]
pub struct Impostor {
    pub value: i32,
}

impl Hooks for Impostor {}

impl Enchantment for Impostor {
    const KIND: Kind = Kind::new(1, "impostor", 50);
}
