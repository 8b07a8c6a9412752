use crate::kinds;
use enchant_core::{Enchantment, EntityId, HookError, HookResult, HookSet, Hooks, Kind};
use serde::{Deserialize, Serialize};

/// Scales incoming heals by `percent`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealingBonus {
    pub percent: f64,
}

impl Hooks for HealingBonus {
    fn on_heal(
        &self,
        _healer: EntityId,
        _patient: EntityId,
        _source: Option<EntityId>,
        amount: &mut f64,
    ) -> HookResult {
        if !amount.is_finite() {
            return Err(HookError::handler(Self::KIND, format!("non-finite heal amount {amount}")));
        }
        *amount *= 1.0 + self.percent / 100.0;
        Ok(())
    }
}

impl Enchantment for HealingBonus {
    const KIND: Kind = kinds::HEALING_BONUS;
    const HOOKS: HookSet = HookSet::HEAL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heal_scaled() {
        let mut amount = 10.0;
        HealingBonus { percent: 25.0 }
            .on_heal(EntityId(1), EntityId(2), None, &mut amount)
            .unwrap();
        assert!((amount - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_heal_rejected() {
        let mut amount = f64::NAN;
        let result =
            HealingBonus { percent: 25.0 }.on_heal(EntityId(1), EntityId(2), None, &mut amount);
        assert!(matches!(result, Err(HookError::Handler { kind: "healing_bonus", .. })));
    }
}
