use crate::kinds;
use enchant_core::{Enchantment, EntityId, HookResult, HookSet, Hooks, Kind};
use serde::{Deserialize, Serialize};

/// Percentage reduction of incoming damage, clamped to 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalResist {
    pub percent: f64,
}

impl Hooks for PhysicalResist {
    fn on_incoming_damage(
        &self,
        _attacker: EntityId,
        _defender: EntityId,
        amount: &mut f64,
    ) -> HookResult {
        *amount *= 1.0 - self.percent.clamp(0.0, 100.0) / 100.0;
        Ok(())
    }
}

impl Enchantment for PhysicalResist {
    const KIND: Kind = kinds::PHYSICAL_RESIST;
    const HOOKS: HookSet = HookSet::INCOMING_DAMAGE;
}

/// Flat addition to incoming damage, applied after reductions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageAmplify {
    pub flat: f64,
}

impl Hooks for DamageAmplify {
    fn on_incoming_damage(
        &self,
        _attacker: EntityId,
        _defender: EntityId,
        amount: &mut f64,
    ) -> HookResult {
        *amount += self.flat;
        Ok(())
    }
}

impl Enchantment for DamageAmplify {
    const KIND: Kind = kinds::DAMAGE_AMPLIFY;
    const HOOKS: HookSet = HookSet::INCOMING_DAMAGE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchant_core::{Enchanted, EnchantmentStore, HookCall};
    use proptest::prelude::*;

    #[test]
    fn test_resist_clamped() {
        let mut amount = 100.0;
        PhysicalResist { percent: 150.0 }
            .on_incoming_damage(EntityId(1), EntityId(2), &mut amount)
            .unwrap();
        assert!(amount.abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduction_applies_before_bonus() {
        let mut store = EnchantmentStore::new();
        // attach order is the reverse of dispatch order
        store.attach(DamageAmplify { flat: 20.0 });
        store.attach(PhysicalResist { percent: 50.0 });

        let mut amount = 100.0;
        store
            .fire_ordered_hook(HookCall::incoming_damage(EntityId(1), EntityId(2), &mut amount))
            .unwrap();
        // 100 * 0.5 + 20, not (100 + 20) * 0.5
        assert!((amount - 70.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_resist_never_amplifies(
            percent in -500.0f64..500.0,
            damage in 0.0f64..10_000.0,
        ) {
            let mut amount = damage;
            PhysicalResist { percent }
                .on_incoming_damage(EntityId(1), EntityId(2), &mut amount)
                .unwrap();
            prop_assert!(amount >= 0.0);
            prop_assert!(amount <= damage);
        }
    }
}
