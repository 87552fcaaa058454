mod builder;
mod diff;

pub use builder::{RegistryBuilder, RegistryError};

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Flag, FlagDescriptor, FlagValue, Flagger, Lifecycle, Map, TypedFlag};

/// An immutable set of flags, in declaration order and indexed by key.
///
/// Built once with a [`RegistryBuilder`]; there is no way to add, remove or change
/// a flag afterwards, so a `Registry` can be shared between threads without locking.
pub struct Registry {
    all: Vec<Arc<dyn Flag>>,
    by_key: HashMap<String, Arc<dyn Flag>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Find a flag by key. Unknown keys are `None`.
    pub fn lookup(&self, key: &str) -> Option<&dyn Flag> {
        self.by_key.get(key).map(|flag| flag.as_ref())
    }

    /// Find a flag by key, if it carries a `T`.
    pub fn get<T: FlagValue>(&self, key: &str) -> Option<&TypedFlag<T>> {
        self.lookup(key)?.downcast_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Every flag, in declaration order.
    pub fn all(&self) -> &[Arc<dyn Flag>] {
        &self.all
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn Flag> {
        self.all.iter().map(|flag| flag.as_ref())
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.iter().map(|flag| flag.key())
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn temporary(&self) -> impl Iterator<Item = &dyn Flag> {
        self.iter().filter(|flag| flag.lifecycle().is_temporary())
    }

    pub fn permanent(&self) -> impl Iterator<Item = &dyn Flag> {
        self.iter().filter(|flag| !flag.lifecycle().is_temporary())
    }

    /// Flags with the given lifecycle (any, if `None`), optionally only those
    /// enabled in the open source distribution. Declaration order is kept.
    pub fn filtered(
        &self,
        lifecycle: Option<Lifecycle>,
        oss_only: bool,
    ) -> impl Iterator<Item = &dyn Flag> {
        self.iter()
            .filter(move |flag| lifecycle.is_none_or(|l| flag.lifecycle() == l))
            .filter(move |flag| !oss_only || flag.enabled_in_oss())
    }

    pub fn descriptors(&self) -> Vec<FlagDescriptor> {
        self.iter().map(FlagDescriptor::of).collect()
    }

    /// Evaluate every flag against `flagger`, keyed by flag key.
    #[cfg_attr(
        feature = "tracing-instrument",
        tracing::instrument(skip_all, fields(flags = self.len()))
    )]
    pub fn evaluate_all(&self, flagger: &dyn Flagger) -> Map {
        self.iter()
            .map(|flag| (flag.key().to_owned(), flag.evaluate_json(flagger)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Arc<dyn Flag>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Flag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.all.iter()
    }
}
