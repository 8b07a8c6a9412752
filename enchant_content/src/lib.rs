//! enchant_content - Stock enchantments built on enchant_core
//!
//! This library provides:
//! - Stock enchantments: DexBonus, HarvestBonus, ToolHarvestBonus,
//!   HealingBonus, PhysicalResist, DamageAmplify
//! - kinds: their kind declarations and registry
//! - lumberjacking: the harvest bonus roll driven by harvest hooks
//! - bench: timing of store access and hook dispatch
//!
//! # Quick Start
//!
//! ```rust
//! use enchant_content::prelude::*;
//!
//! let mut world = World::new();
//! let lumberjack = world.spawn();
//! let store = world.entity_mut(lumberjack).unwrap().enchantments_mut();
//! store.attach(HarvestBonus { value: 10 });
//! store.attach(ToolHarvestBonus { percent: 50 });
//!
//! let mut bonus = 100;
//! world
//!     .fire_ordered_hook(lumberjack, HookCall::harvest_bonus(lumberjack, &mut bonus))
//!     .unwrap();
//! assert_eq!(bonus, 165);
//! ```

pub mod bench;
pub mod config;
pub mod enchantments;
pub mod kinds;
pub mod lumberjacking;

pub use bench::{benchmark_hooks, BenchReport, BenchSummary};
pub use config::{BenchConfig, ConfigError};
pub use enchantments::{
    DamageAmplify, DexBonus, HarvestBonus, HealingBonus, PhysicalResist, ToolHarvestBonus,
};
pub use kinds::stock_registry;
pub use lumberjacking::{roll_harvest_bonus, HarvestBonusRoll, HarvestOutcome};

/// Prelude: the runtime plus the stock enchantments
pub mod prelude {
    pub use crate::enchantments::*;
    pub use crate::lumberjacking::{roll_harvest_bonus, HarvestBonusRoll, HarvestOutcome};
    pub use enchant_core::prelude::*;
}
