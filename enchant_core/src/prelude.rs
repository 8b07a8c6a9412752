//! Prelude module for convenient imports
//!
//! ```rust
//! use enchant_core::prelude::*;
//! ```

// Storage
pub use crate::enchantment::{DynEnchantment, Enchantment};
pub use crate::kind::{Kind, KindRegistry};
pub use crate::store::EnchantmentStore;

// Dispatch
pub use crate::dispatch::Enchanted;
pub use crate::hooks::{Hook, HookCall, HookSet, Hooks};

// Entities
pub use crate::entity::{Entity, EntityId};
pub use crate::world::World;

// Errors
pub use crate::error::{DispatchError, HookError, HookResult};
