//! Lumberjacking bonus roll
//!
//! After a successful chop the harvester rolls for a bonus find. The roll is
//! `1..=100` plus `skill / 30`, adjusted by the harvester's enchantments:
//! - `OnHarvestBonus` adjusts the skill part
//! - `OnToolHarvestBonus` adjusts an extra +2 granted by an enchanted tool
//!
//! The final chance maps onto a fixed outcome table.

use crate::enchantments::HarvestBonus;
use enchant_core::{Enchanted, EntityId, HookCall, HookError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Base extra chance granted by an enchanted tool
const TOOL_BONUS_CHANCE: i32 = 2;

/// Skill points per point of bonus
const SKILL_PER_BONUS: f64 = 30.0;

/// What the bonus roll turned up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum HarvestOutcome {
    /// The tool broke
    ToolBreaks,
    DeadWood { amount: u32 },
    YoungOakLog { amount: u32 },
    Nothing,
}

impl HarvestOutcome {
    /// Map a final chance onto the outcome table
    pub fn from_chance(chance: i32) -> Self {
        match chance {
            1..=4 => HarvestOutcome::ToolBreaks,
            96..=100 => HarvestOutcome::DeadWood { amount: 1 },
            101..=104 => HarvestOutcome::YoungOakLog { amount: 1 },
            105..=108 => HarvestOutcome::DeadWood { amount: 2 },
            109..=110 => HarvestOutcome::YoungOakLog { amount: 2 },
            111..=112 => HarvestOutcome::DeadWood { amount: 3 },
            113..=114 => HarvestOutcome::YoungOakLog { amount: 3 },
            115 => HarvestOutcome::YoungOakLog { amount: 4 },
            _ => HarvestOutcome::Nothing,
        }
    }

    /// Message shown to the harvester, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            HarvestOutcome::ToolBreaks => Some("Oh no your tool breaks!"),
            HarvestOutcome::DeadWood { .. } => Some("You find some dead wood!"),
            HarvestOutcome::YoungOakLog { .. } => Some("You find some young oak wood!"),
            HarvestOutcome::Nothing => None,
        }
    }
}

/// Result of a bonus roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarvestBonusRoll {
    pub chance: i32,
    pub outcome: HarvestOutcome,
}

/// Roll the lumberjacking bonus for `harvester` using `tool`
///
/// `harvester_id` is the id handed to hooks. The tool counts as enchanted
/// when it carries a [`HarvestBonus`] with a positive value.
pub fn roll_harvest_bonus<H, T, R>(
    harvester_id: EntityId,
    harvester: &H,
    tool: Option<&T>,
    skill: f64,
    rng: &mut R,
) -> Result<HarvestBonusRoll, HookError>
where
    H: Enchanted + ?Sized,
    T: Enchanted + ?Sized,
    R: Rng,
{
    let mut chance: i32 = rng.gen_range(1..=100);
    let mut bonus = (skill / SKILL_PER_BONUS) as i32;

    harvester.fire_ordered_hook(HookCall::harvest_bonus(harvester_id, &mut bonus))?;
    chance = chance.saturating_add(bonus);

    let tool_enchanted = tool
        .map(|t| t.enchantments().get(|e: &HarvestBonus| e.value) > 0)
        .unwrap_or(false);
    if tool_enchanted {
        let mut tool_chance = TOOL_BONUS_CHANCE;
        harvester.fire_hook(HookCall::tool_harvest_bonus(harvester_id, &mut tool_chance))?;
        chance = chance.saturating_add(tool_chance);
    }

    Ok(HarvestBonusRoll {
        chance,
        outcome: HarvestOutcome::from_chance(chance),
    })
}

/// [`roll_harvest_bonus`] with a seeded ChaCha RNG, for replays
pub fn roll_harvest_bonus_seeded<H, T>(
    harvester_id: EntityId,
    harvester: &H,
    tool: Option<&T>,
    skill: f64,
    seed: u64,
) -> Result<HarvestBonusRoll, HookError>
where
    H: Enchanted + ?Sized,
    T: Enchanted + ?Sized,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    roll_harvest_bonus(harvester_id, harvester, tool, skill, &mut rng)
}
