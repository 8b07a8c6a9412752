//! EnchantmentStore - per-entity storage keyed by enchantment kind
//!
//! Each kind owns one slot in a vector indexed by [`Kind::id`], so `get`,
//! `set` and `has` are an index plus a type check. Two kind lists are kept
//! alongside the slots:
//! - attach order, walked by unordered dispatch
//! - dispatch order (ordering key, then id), walked by ordered dispatch
//!
//! Both lists are maintained on attach/detach so dispatch never sorts.

use crate::enchantment::{DynEnchantment, Enchantment};
use crate::kind::Kind;
use std::any::TypeId;
use std::cmp::Ordering;
use tracing::{trace, warn};

/// Heterogeneous map from enchantment kind to at most one live instance
#[derive(Debug, Default)]
pub struct EnchantmentStore {
    slots: Vec<Option<Box<dyn DynEnchantment>>>,
    attached: Vec<Kind>,
    ordered: Vec<Kind>,
}

impl EnchantmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an enchantment, replacing any instance of the same kind
    ///
    /// Returns `true` when an existing instance was replaced. A replaced
    /// kind keeps its position in attach order. If the slot was held by a
    /// different type declaring the same id, that instance is displaced
    /// and the new kind's name and ordering key take over.
    pub fn attach<T: Enchantment>(&mut self, enchantment: T) -> bool {
        let kind = T::KIND;
        let index = kind.index();
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }

        let previous = self.slots[index].replace(Box::new(enchantment));
        match &previous {
            None => {
                self.attached.push(kind);
                self.insert_ordered(kind);
            }
            Some(old) if old.as_any().type_id() != TypeId::of::<T>() => {
                warn!(
                    id = kind.id(),
                    kind = %kind,
                    displaced = %old.kind(),
                    "kind id collision, displaced a different enchantment type"
                );
                if let Some(slot) = self.attached.iter_mut().find(|k| **k == kind) {
                    *slot = kind;
                }
                self.ordered.retain(|k| *k != kind);
                self.insert_ordered(kind);
            }
            Some(_) => {}
        }

        let replaced = previous.is_some();
        trace!(kind = %kind, replaced, "attached enchantment");
        replaced
    }

    fn insert_ordered(&mut self, kind: Kind) {
        let at = self
            .ordered
            .partition_point(|k| k.dispatch_cmp(&kind) == Ordering::Less);
        self.ordered.insert(at, kind);
    }

    /// Detach the enchantment of `kind`
    ///
    /// Returns whether something was removed; detaching an absent kind is a
    /// no-op.
    pub fn detach(&mut self, kind: Kind) -> bool {
        self.take(kind).is_some()
    }

    /// Detach the enchantment of type `T` and hand it back
    ///
    /// Returns `None`, leaving the slot alone, when the kind's slot holds
    /// some other type.
    pub fn remove<T: Enchantment>(&mut self) -> Option<T> {
        if !self.contains::<T>() {
            return None;
        }
        let boxed = self.take(T::KIND)?;
        boxed.into_any().downcast::<T>().ok().map(|b| *b)
    }

    fn take(&mut self, kind: Kind) -> Option<Box<dyn DynEnchantment>> {
        let removed = self.slots.get_mut(kind.index())?.take()?;
        self.attached.retain(|k| *k != kind);
        self.ordered.retain(|k| *k != kind);
        trace!(kind = %kind, "detached enchantment");
        Some(removed)
    }

    /// Whether an enchantment of `kind` is attached
    pub fn has(&self, kind: Kind) -> bool {
        self.slot(kind).is_some()
    }

    /// Whether an enchantment of type `T` is attached
    pub fn contains<T: Enchantment>(&self) -> bool {
        self.typed::<T>().is_some()
    }

    /// Read a value from the attached `T`, or `R::default()` when absent
    ///
    /// ```rust
    /// # use enchant_core::{Enchantment, EnchantmentStore, Hooks, Kind};
    /// # #[derive(Debug)]
    /// # struct DexBonus { value: i32 }
    /// # impl Hooks for DexBonus {}
    /// # impl Enchantment for DexBonus { const KIND: Kind = Kind::new(1, "dex_bonus", 0); }
    /// let mut store = EnchantmentStore::new();
    /// assert_eq!(store.get(|e: &DexBonus| e.value), 0);
    ///
    /// store.attach(DexBonus { value: 5 });
    /// assert_eq!(store.get(|e: &DexBonus| e.value), 5);
    /// ```
    pub fn get<T, R, F>(&self, accessor: F) -> R
    where
        T: Enchantment,
        R: Default,
        F: FnOnce(&T) -> R,
    {
        self.try_get(accessor).unwrap_or_default()
    }

    /// Read a value from the attached `T`, or `None` when absent
    pub fn try_get<T, R, F>(&self, accessor: F) -> Option<R>
    where
        T: Enchantment,
        F: FnOnce(&T) -> R,
    {
        self.typed::<T>().map(accessor)
    }

    /// Mutate the attached `T` in place
    ///
    /// Returns `false` and does nothing when no `T` is attached; writes never
    /// create an enchantment.
    pub fn set<T, F>(&mut self, mutator: F) -> bool
    where
        T: Enchantment,
        F: FnOnce(&mut T),
    {
        match self.typed_mut::<T>() {
            Some(enchantment) => {
                mutator(enchantment);
                true
            }
            None => false,
        }
    }

    /// Number of attached enchantments
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Attached kinds in attach order
    pub fn kinds(&self) -> &[Kind] {
        &self.attached
    }

    /// Attached kinds in dispatch order
    pub fn ordered_kinds(&self) -> &[Kind] {
        &self.ordered
    }

    /// Attached enchantments in attach order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DynEnchantment> + '_ {
        self.attached.iter().filter_map(|k| self.slot(*k))
    }

    /// Attached enchantments in dispatch order
    pub fn iter_ordered(&self) -> impl Iterator<Item = &dyn DynEnchantment> + '_ {
        self.ordered.iter().filter_map(|k| self.slot(*k))
    }

    /// Detach everything without running any hook
    pub fn clear(&mut self) {
        self.slots.clear();
        self.attached.clear();
        self.ordered.clear();
    }

    fn slot(&self, kind: Kind) -> Option<&dyn DynEnchantment> {
        self.slots.get(kind.index())?.as_deref()
    }

    fn typed<T: Enchantment>(&self) -> Option<&T> {
        self.slot(T::KIND)?.as_any().downcast_ref::<T>()
    }

    fn typed_mut<T: Enchantment>(&mut self) -> Option<&mut T> {
        self.slots
            .get_mut(T::KIND.index())?
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<T>()
    }
}
