//! enchant_core - Enchantment storage and hook dispatch for game entities
//!
//! This library provides:
//! - EnchantmentStore: per-entity map from enchantment kind to one instance
//! - Hook dispatch: ordered and unordered fan-out over attached enchantments
//! - Kind / KindRegistry: stable small-integer identities and their registry
//! - World: a table of entities addressed by id
//!
//! # Quick Start
//!
//! ```rust
//! use enchant_core::prelude::*;
//!
//! #[derive(Debug)]
//! struct DexBonus {
//!     value: i32,
//! }
//!
//! impl Hooks for DexBonus {}
//!
//! impl Enchantment for DexBonus {
//!     const KIND: Kind = Kind::new(1, "dex_bonus", 0);
//! }
//!
//! let mut world = World::new();
//! let rat = world.spawn();
//!
//! let store = world.entity_mut(rat).unwrap().enchantments_mut();
//! store.attach(DexBonus { value: 0 });
//! store.set(|e: &mut DexBonus| e.value = 5);
//! assert_eq!(store.get(|e: &DexBonus| e.value), 5);
//!
//! // Nothing on the rat responds to heals
//! let mut amount = 10.0;
//! let fired = world
//!     .fire_ordered_hook(rat, HookCall::heal(rat, rat, None, &mut amount))
//!     .unwrap();
//! assert_eq!(fired, 0);
//! ```

pub mod dispatch;
pub mod enchantment;
pub mod entity;
pub mod error;
pub mod hooks;
pub mod kind;
pub mod prelude;
pub mod store;
pub mod world;

#[cfg(test)]
mod test_support;

// Core API - what most users need
pub use dispatch::{fire_hook, fire_ordered_hook, Enchanted};
pub use enchantment::{DynEnchantment, Enchantment};
pub use entity::{Entity, EntityId};
pub use hooks::{Hook, HookCall, HookSet, Hooks};
pub use kind::{Kind, KindRegistry};
pub use store::EnchantmentStore;
pub use world::World;

// Errors
pub use error::{DispatchError, HookError, HookResult, RegistryError};
