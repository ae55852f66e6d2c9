//! Ordered key/value bags.
//!
//! A `Bag` is the ad hoc object of the boundary: a string-keyed mapping
//! that preserves insertion order. The same container backs the `anonymous`
//! field, named-argument calls, and bag-taking constructors, so every
//! call-site marshals the one shape.

use std::fmt;
use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::error::BridgeError;
use crate::value::{Str, Value};

type Entries = IndexMap<Str, Value, BuildHasherDefault<FxHasher>>;

/// Ordered string-keyed mapping of boundary values.
///
/// Equality is by content, not insertion order, matching what a harness
/// asserts after a wholesale replacement.
#[derive(Clone, Default)]
pub struct Bag {
    entries: Entries,
}

impl Bag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(Default::default()),
        }
    }

    /// Insert an entry, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<Str>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up an entry that the caller requires to be present.
    ///
    /// Missing keys surface as the boundary's missing-member failure and
    /// propagate to the harness unchanged.
    pub fn require(&self, key: &str) -> Result<&Value, BridgeError> {
        self.entries
            .get(key)
            .ok_or_else(|| BridgeError::missing_member("bag", key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Str, &Value)> {
        self.entries.iter()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Str> {
        self.entries.keys()
    }
}

impl PartialEq for Bag {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<Str>, V: Into<Value>> FromIterator<(K, V)> for Bag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Bag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl fmt::Debug for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.entries {
            map.entry(&key.as_str(), value);
        }
        map.finish()
    }
}
