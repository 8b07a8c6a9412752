//! Enchantment kind identity and the kind registry
//!
//! A [`Kind`] is the stable identity of one enchantment type. Its `id` is a
//! small integer that doubles as the slot index inside an
//! [`EnchantmentStore`](crate::EnchantmentStore), so lookups never hash or
//! allocate. Its `order` is the ordering key used by ordered hook dispatch.

use crate::error::RegistryError;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Identity of an enchantment type
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Kind {
    id: u16,
    name: &'static str,
    order: i32,
}

impl Kind {
    /// Declare a kind. Meant to be used in a `const KIND` item.
    pub const fn new(id: u16, name: &'static str, order: i32) -> Self {
        Kind { id, name, order }
    }

    /// Slot index of this kind
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Human readable name (e.g. `"dex_bonus"`)
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ordering key for ordered dispatch (lower runs first)
    pub const fn order(&self) -> i32 {
        self.order
    }

    pub(crate) fn index(&self) -> usize {
        self.id as usize
    }

    /// Compare two kinds by dispatch order: ordering key, then id.
    pub fn dispatch_cmp(&self, other: &Kind) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.id.cmp(&other.id))
    }
}

// Identity is the id alone; name and order are descriptive.
impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl std::hash::Hash for Kind {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Registry of every kind a content layer declares
///
/// Rejects colliding ids and names, and resolves kinds by name for
/// configuration and tooling.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    by_id: Vec<Option<Kind>>,
    by_name: HashMap<&'static str, Kind>,
}

impl KindRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind
    pub fn register(&mut self, kind: Kind) -> Result<(), RegistryError> {
        if let Some(existing) = self.by_id(kind.id()) {
            return Err(RegistryError::DuplicateId {
                id: kind.id(),
                existing: existing.name(),
                name: kind.name(),
            });
        }
        if self.by_name.contains_key(kind.name()) {
            return Err(RegistryError::DuplicateName(kind.name().to_string()));
        }

        if self.by_id.len() <= kind.index() {
            self.by_id.resize(kind.index() + 1, None);
        }
        self.by_id[kind.index()] = Some(kind);
        self.by_name.insert(kind.name(), kind);
        Ok(())
    }

    /// Build a registry from a list of kinds
    pub fn from_kinds(kinds: &[Kind]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register(*kind)?;
        }
        Ok(registry)
    }

    /// Resolve a kind by name
    pub fn lookup(&self, name: &str) -> Result<Kind, RegistryError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownKind(name.to_string()))
    }

    /// Get a kind by id
    pub fn by_id(&self, id: u16) -> Option<Kind> {
        self.by_id.get(id as usize).copied().flatten()
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate kinds in id order
    pub fn iter(&self) -> impl Iterator<Item = Kind> + '_ {
        self.by_id.iter().filter_map(|k| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Kind = Kind::new(1, "a", 5);
    const B: Kind = Kind::new(2, "b", 5);
    const C: Kind = Kind::new(3, "c", -1);

    #[test]
    fn test_dispatch_order_uses_key_then_id() {
        let mut kinds = vec![B, A, C];
        kinds.sort_by(Kind::dispatch_cmp);
        assert_eq!(kinds, vec![C, A, B]);
    }

    #[test]
    fn test_identity_is_id() {
        assert_eq!(A, Kind::new(1, "renamed", 99));
        assert_ne!(A, B);
        assert_eq!(A.to_string(), "a");
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = KindRegistry::from_kinds(&[A, B, C]).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup("b").unwrap(), B);
        assert_eq!(registry.by_id(3), Some(C));
        assert_eq!(registry.by_id(40), None);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![A, B, C]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = KindRegistry::new();
        registry.register(A).unwrap();
        let result = registry.register(Kind::new(1, "other", 0));
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateId { id: 1, existing: "a", name: "other" })
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = KindRegistry::new();
        registry.register(A).unwrap();
        let result = registry.register(Kind::new(9, "a", 0));
        assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "a"));
    }

    #[test]
    fn test_unknown_kind() {
        let registry = KindRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(registry.lookup("nope"), Err(RegistryError::UnknownKind(_))));
    }

    #[test]
    fn test_kind_serializes_descriptively() {
        let json = serde_json::to_string(&A).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"a","order":5}"#);
    }
}
