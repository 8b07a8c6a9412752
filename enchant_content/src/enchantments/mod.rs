//! Stock enchantments

mod attributes;
mod combat;
mod harvesting;
mod healing;

pub use attributes::DexBonus;
pub use combat::{DamageAmplify, PhysicalResist};
pub use harvesting::{HarvestBonus, ToolHarvestBonus};
pub use healing::HealingBonus;
