//! The [`Enchantment`] trait and its type-erased form

use crate::hooks::{HookSet, Hooks};
use crate::kind::Kind;
use std::any::Any;
use std::fmt;

/// A component that can be attached to an entity.
///
/// `KIND` fixes the identity of the type; an entity holds at most one value
/// of each kind. `HOOKS` declares which [`Hooks`] methods the type overrides.
///
/// # Examples
///
/// ```rust
/// use enchant_core::{Enchantment, EntityId, HookResult, HookSet, Hooks, Kind};
///
/// #[derive(Debug)]
/// struct Lucky {
///     value: i32,
/// }
///
/// impl Hooks for Lucky {
///     fn on_harvest_bonus(&self, _harvester: EntityId, bonus: &mut i32) -> HookResult {
///         *bonus += self.value;
///         Ok(())
///     }
/// }
///
/// impl Enchantment for Lucky {
///     const KIND: Kind = Kind::new(40, "lucky", 0);
///     const HOOKS: HookSet = HookSet::HARVEST_BONUS;
/// }
/// ```
pub trait Enchantment: Hooks + Any + fmt::Debug + Send + Sync {
    const KIND: Kind;
    const HOOKS: HookSet = HookSet::empty();
}

/// Object-safe view of an attached enchantment.
///
/// Implemented for every [`Enchantment`]; this is what the store holds and
/// what [`HookCall::apply`](crate::HookCall::apply) runs against.
pub trait DynEnchantment: Hooks + Any + fmt::Debug + Send + Sync {
    fn kind(&self) -> Kind;
    fn hooks(&self) -> HookSet;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Enchantment> DynEnchantment for T {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn hooks(&self) -> HookSet {
        T::HOOKS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
