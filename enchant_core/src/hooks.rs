//! Hook capabilities
//!
//! Every enchantment shares one hook surface, [`Hooks`], whose methods default
//! to no-ops. A type opts into capabilities by overriding the matching methods
//! and listing them in [`Enchantment::HOOKS`](crate::Enchantment::HOOKS). The
//! dispatcher only calls enchantments whose declared set contains the hook
//! being fired, so undeclared overrides are never reached.
//!
//! A fired hook is a [`HookCall`]: the capability and its context travel
//! together, and [`HookCall::apply`] routes to the one matching method.
//! Context values (amounts, bonuses, chances) are held by `&mut` and adjusted
//! in place. Ordered dispatch threads the same value through each handler.

use crate::entity::EntityId;
use crate::error::{HookError, HookResult};
use bitflags::bitflags;
use std::fmt;

/// A single hook capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// A heal is about to land
    Heal,
    /// A harvester's bonus roll is being computed
    HarvestBonus,
    /// The tool-specific part of a harvest bonus roll
    ToolHarvestBonus,
    /// Damage is about to be applied to a defender
    IncomingDamage,
}

impl Hook {
    pub fn all() -> &'static [Hook] {
        &[
            Hook::Heal,
            Hook::HarvestBonus,
            Hook::ToolHarvestBonus,
            Hook::IncomingDamage,
        ]
    }

    /// Capability name
    pub fn name(&self) -> &'static str {
        match self {
            Hook::Heal => "OnHeal",
            Hook::HarvestBonus => "OnHarvestBonus",
            Hook::ToolHarvestBonus => "OnToolHarvestBonus",
            Hook::IncomingDamage => "OnIncomingDamage",
        }
    }

    /// The single-bit set for this hook
    pub const fn flag(self) -> HookSet {
        match self {
            Hook::Heal => HookSet::HEAL,
            Hook::HarvestBonus => HookSet::HARVEST_BONUS,
            Hook::ToolHarvestBonus => HookSet::TOOL_HARVEST_BONUS,
            Hook::IncomingDamage => HookSet::INCOMING_DAMAGE,
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of hooks an enchantment type implements
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HookSet: u32 {
        const HEAL = 1 << 0;
        const HARVEST_BONUS = 1 << 1;
        const TOOL_HARVEST_BONUS = 1 << 2;
        const INCOMING_DAMAGE = 1 << 3;
    }
}

impl HookSet {
    /// Whether the set contains `hook`
    pub const fn implements(self, hook: Hook) -> bool {
        self.contains(hook.flag())
    }
}

/// Hook surface shared by all enchantments
pub trait Hooks {
    /// `amount` is the heal about to be applied to `patient`.
    fn on_heal(
        &self,
        _healer: EntityId,
        _patient: EntityId,
        _source: Option<EntityId>,
        _amount: &mut f64,
    ) -> HookResult {
        Ok(())
    }

    /// `bonus` is added to the harvester's bonus roll.
    fn on_harvest_bonus(&self, _harvester: EntityId, _bonus: &mut i32) -> HookResult {
        Ok(())
    }

    /// `chance` is the extra roll granted by an enchanted tool.
    fn on_tool_harvest_bonus(&self, _harvester: EntityId, _chance: &mut i32) -> HookResult {
        Ok(())
    }

    /// `amount` is the damage about to be applied to `defender`.
    fn on_incoming_damage(
        &self,
        _attacker: EntityId,
        _defender: EntityId,
        _amount: &mut f64,
    ) -> HookResult {
        Ok(())
    }
}

/// One firing of a hook, carrying the context its handlers adjust
#[derive(Debug)]
pub enum HookCall<'a> {
    Heal {
        healer: EntityId,
        patient: EntityId,
        source: Option<EntityId>,
        amount: &'a mut f64,
    },
    HarvestBonus {
        harvester: EntityId,
        bonus: &'a mut i32,
    },
    ToolHarvestBonus {
        harvester: EntityId,
        chance: &'a mut i32,
    },
    IncomingDamage {
        attacker: EntityId,
        defender: EntityId,
        amount: &'a mut f64,
    },
}

impl<'a> HookCall<'a> {
    pub fn heal(
        healer: EntityId,
        patient: EntityId,
        source: Option<EntityId>,
        amount: &'a mut f64,
    ) -> Self {
        HookCall::Heal {
            healer,
            patient,
            source,
            amount,
        }
    }

    pub fn harvest_bonus(harvester: EntityId, bonus: &'a mut i32) -> Self {
        HookCall::HarvestBonus { harvester, bonus }
    }

    pub fn tool_harvest_bonus(harvester: EntityId, chance: &'a mut i32) -> Self {
        HookCall::ToolHarvestBonus { harvester, chance }
    }

    pub fn incoming_damage(attacker: EntityId, defender: EntityId, amount: &'a mut f64) -> Self {
        HookCall::IncomingDamage {
            attacker,
            defender,
            amount,
        }
    }

    /// The capability this call fires
    pub fn hook(&self) -> Hook {
        match self {
            HookCall::Heal { .. } => Hook::Heal,
            HookCall::HarvestBonus { .. } => Hook::HarvestBonus,
            HookCall::ToolHarvestBonus { .. } => Hook::ToolHarvestBonus,
            HookCall::IncomingDamage { .. } => Hook::IncomingDamage,
        }
    }

    /// Reject a context no handler should see (non-finite amounts)
    pub fn validate(&self) -> HookResult {
        let amount = match self {
            HookCall::Heal { amount, .. } | HookCall::IncomingDamage { amount, .. } => **amount,
            HookCall::HarvestBonus { .. } | HookCall::ToolHarvestBonus { .. } => return Ok(()),
        };
        if amount.is_finite() {
            Ok(())
        } else {
            Err(HookError::context(format!(
                "{} fired with non-finite amount {amount}",
                self.hook()
            )))
        }
    }

    /// Run `handler`'s method for this call's capability
    pub fn apply<H: Hooks + ?Sized>(&mut self, handler: &H) -> HookResult {
        match self {
            HookCall::Heal {
                healer,
                patient,
                source,
                amount,
            } => handler.on_heal(*healer, *patient, *source, amount),
            HookCall::HarvestBonus { harvester, bonus } => {
                handler.on_harvest_bonus(*harvester, bonus)
            }
            HookCall::ToolHarvestBonus { harvester, chance } => {
                handler.on_tool_harvest_bonus(*harvester, chance)
            }
            HookCall::IncomingDamage {
                attacker,
                defender,
                amount,
            } => handler.on_incoming_damage(*attacker, *defender, amount),
        }
    }
}
