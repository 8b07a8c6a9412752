//! World - the table of live entities
//!
//! Resolves entity ids for callers that address entities by id. Looking up
//! or dispatching on an id that is not live fails with
//! [`DispatchError::UnknownEntity`].

use crate::dispatch::Enchanted;
use crate::entity::{Entity, EntityId};
use crate::error::DispatchError;
use crate::hooks::HookCall;
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
    next_id: u64,
}

impl World {
    /// Create an empty world. Ids start at 1 (0 is [`EntityId::INVALID`]).
    pub fn new() -> Self {
        World {
            entities: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create an entity with an empty enchantment store
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, Entity::new(id));
        trace!(entity = %id, "spawned entity");
        id
    }

    /// Remove an entity, releasing its enchantments without running hooks
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let removed = self.entities.remove(&id);
        if let Some(entity) = &removed {
            trace!(entity = %id, enchantments = entity.enchantments().len(), "despawned entity");
        }
        removed.is_some()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity, DispatchError> {
        self.entities.get(&id).ok_or(DispatchError::UnknownEntity(id))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, DispatchError> {
        self.entities
            .get_mut(&id)
            .ok_or(DispatchError::UnknownEntity(id))
    }

    /// Unordered dispatch on the entity `id`
    pub fn fire_hook(&self, id: EntityId, call: HookCall<'_>) -> Result<usize, DispatchError> {
        Ok(self.entity(id)?.fire_hook(call)?)
    }

    /// Ordered dispatch on the entity `id`
    pub fn fire_ordered_hook(
        &self,
        id: EntityId,
        call: HookCall<'_>,
    ) -> Result<usize, DispatchError> {
        Ok(self.entity(id)?.fire_ordered_hook(call)?)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchantment::Enchantment;
    use crate::error::HookError;
    use crate::test_support::{Brittle, DexBonus, Keyed, Mending};

    #[test]
    fn test_spawn_allocates_unique_ids() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_entities_are_isolated() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();

        let store = world.entity_mut(a).unwrap().enchantments_mut();
        store.attach(DexBonus { value: 0 });
        store.set(|e: &mut DexBonus| e.value = 7);
        store.attach(Mending { percent: 50.0 });

        let other = world.entity(b).unwrap().enchantments();
        assert!(!other.has(DexBonus::KIND));
        assert_eq!(other.get(|e: &DexBonus| e.value), 0);

        let mut amount = 10.0;
        let fired = world
            .fire_hook(b, HookCall::heal(a, b, None, &mut amount))
            .unwrap();
        assert_eq!(fired, 0);
        assert!((amount - 10.0).abs() < f64::EPSILON);

        let fired = world
            .fire_hook(a, HookCall::heal(a, a, None, &mut amount))
            .unwrap();
        assert_eq!(fired, 1);
        assert!((amount - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_entity_fails_fast() {
        let mut world = World::new();
        let id = world.spawn();
        assert!(world.despawn(id));
        assert!(!world.despawn(id));

        let mut amount = 10.0;
        let result = world.fire_ordered_hook(id, HookCall::heal(id, id, None, &mut amount));
        assert_eq!(result, Err(DispatchError::UnknownEntity(id)));
        assert!((amount - 10.0).abs() < f64::EPSILON);

        let result = world.fire_hook(
            EntityId::INVALID,
            HookCall::heal(id, EntityId::INVALID, None, &mut amount),
        );
        assert_eq!(result, Err(DispatchError::UnknownEntity(EntityId::INVALID)));
        assert!(matches!(world.entity(id), Err(DispatchError::UnknownEntity(_))));
    }

    #[test]
    fn test_handler_errors_are_wrapped() {
        let mut world = World::new();
        let id = world.spawn();
        let store = world.entity_mut(id).unwrap().enchantments_mut();
        store.attach(Keyed::<1>);
        store.attach(Brittle);

        let mut bonus = 0;
        let result = world.fire_ordered_hook(id, HookCall::harvest_bonus(id, &mut bonus));
        assert_eq!(
            result,
            Err(DispatchError::Hook(HookError::handler(Brittle::KIND, "shattered")))
        );
        assert_eq!(bonus, 1);
    }

    #[test]
    fn test_despawn_tears_down_store() {
        let mut world = World::new();
        let id = world.spawn();
        world
            .entity_mut(id)
            .unwrap()
            .enchantments_mut()
            .attach(DexBonus { value: 2 });
        world.despawn(id);

        let fresh = world.spawn();
        assert_ne!(fresh, id);
        assert!(world.entity(fresh).unwrap().enchantments().is_empty());
    }
}
