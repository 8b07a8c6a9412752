//! Entity identity and the entity that owns an enchantment store

use crate::dispatch::Enchanted;
use crate::store::EnchantmentStore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique entity identifier.
///
/// Ids are plain handles; everything an entity carries lives in its
/// [`EnchantmentStore`]. `0` is reserved for [`EntityId::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel.
    pub const INVALID: EntityId = EntityId(0);

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) entity.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// An addressable game object that can host enchantments
///
/// The store is created empty with the entity and dropped with it. Dropping
/// releases every attached enchantment without running any hook.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    enchantments: EnchantmentStore,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Entity {
            id,
            enchantments: EnchantmentStore::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl Enchanted for Entity {
    fn enchantments(&self) -> &EnchantmentStore {
        &self.enchantments
    }

    fn enchantments_mut(&mut self) -> &mut EnchantmentStore {
        &mut self.enchantments
    }
}
