//! Hook dispatch
//!
//! Dispatch is a stateless fan-out over the enchantments attached to one
//! host. It is re-derived from the live store on every call:
//!
//! - [`fire_hook`] visits implementers in attach order. Callers must not
//!   rely on that order; handlers fired this way should commute.
//! - [`fire_ordered_hook`] visits implementers by ordering key (ties broken
//!   by kind id), so each handler sees the context as left by the previous
//!   one.
//!
//! The capability fired is the variant of the [`HookCall`], and each
//! implementer runs exactly the method of that capability. A call whose
//! context fails [`HookCall::validate`] is rejected before any handler runs.
//!
//! Both stop at the first handler error and return it. On success they
//! return how many handlers ran; zero implementers is not an error.
//!
//! The store is borrowed shared for the whole dispatch, so reads and other
//! dispatches may overlap it, but nothing can attach or detach on an entity
//! while it is being dispatched:
//!
//! ```compile_fail
//! use enchant_core::{dispatch, Enchanted, Entity, EntityId, HookCall};
//!
//! let mut entity = Entity::new(EntityId(1));
//! let host = &entity;
//! let mut amount = 10.0;
//! let call = HookCall::heal(EntityId(1), EntityId(1), None, &mut amount);
//! dispatch::fire_hook(host, call).unwrap();
//! entity.enchantments_mut().clear();
//! let _ = host.enchantments().len();
//! ```

use crate::enchantment::DynEnchantment;
use crate::error::HookError;
use crate::hooks::{Hook, HookCall};
use crate::kind::Kind;
use crate::store::EnchantmentStore;
use tracing::debug;

/// Anything that owns an [`EnchantmentStore`]
pub trait Enchanted {
    fn enchantments(&self) -> &EnchantmentStore;
    fn enchantments_mut(&mut self) -> &mut EnchantmentStore;

    /// Unordered dispatch, see [`fire_hook`]
    fn fire_hook(&self, call: HookCall<'_>) -> Result<usize, HookError> {
        crate::dispatch::fire_hook(self, call)
    }

    /// Ordered dispatch, see [`fire_ordered_hook`]
    fn fire_ordered_hook(&self, call: HookCall<'_>) -> Result<usize, HookError> {
        crate::dispatch::fire_ordered_hook(self, call)
    }
}

impl Enchanted for EnchantmentStore {
    fn enchantments(&self) -> &EnchantmentStore {
        self
    }

    fn enchantments_mut(&mut self) -> &mut EnchantmentStore {
        self
    }
}

/// Fire `call` on every implementing enchantment, in no promised order
///
/// ```rust
/// use enchant_core::prelude::*;
///
/// # #[derive(Debug)]
/// # struct Lucky;
/// # impl Hooks for Lucky {
/// #     fn on_harvest_bonus(&self, _h: EntityId, bonus: &mut i32) -> HookResult {
/// #         *bonus += 2;
/// #         Ok(())
/// #     }
/// # }
/// # impl Enchantment for Lucky {
/// #     const KIND: Kind = Kind::new(1, "lucky", 0);
/// #     const HOOKS: HookSet = HookSet::HARVEST_BONUS;
/// # }
/// let mut harvester = Entity::new(EntityId(1));
/// harvester.enchantments_mut().attach(Lucky);
///
/// let mut bonus = 1;
/// let fired = harvester
///     .fire_hook(HookCall::harvest_bonus(EntityId(1), &mut bonus))
///     .unwrap();
/// assert_eq!(fired, 1);
/// assert_eq!(bonus, 3);
/// ```
pub fn fire_hook<H>(host: &H, call: HookCall<'_>) -> Result<usize, HookError>
where
    H: Enchanted + ?Sized,
{
    let store = host.enchantments();
    run(store.iter(), call)
}

/// Fire `call` on every implementing enchantment in dispatch order
pub fn fire_ordered_hook<H>(host: &H, call: HookCall<'_>) -> Result<usize, HookError>
where
    H: Enchanted + ?Sized,
{
    let store = host.enchantments();
    run(store.iter_ordered(), call)
}

fn run<'a, I>(enchantments: I, mut call: HookCall<'_>) -> Result<usize, HookError>
where
    I: Iterator<Item = &'a dyn DynEnchantment>,
{
    let hook = call.hook();
    call.validate()?;

    let mut fired = 0;
    for enchantment in enchantments.filter(|e| e.hooks().implements(hook)) {
        if let Err(error) = call.apply(enchantment) {
            log_abort(enchantment.kind(), hook, fired, &error);
            return Err(error);
        }
        fired += 1;
    }
    Ok(fired)
}

fn log_abort(kind: Kind, hook: Hook, fired: usize, error: &HookError) {
    debug!(kind = %kind, hook = %hook, fired, %error, "hook handler failed, dispatch aborted");
}
