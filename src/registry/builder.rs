use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{Flag, Registry};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A flag with key '{0}' is already registered")]
    DuplicateKey(String),

    #[error("A flag named '{0}' is already registered")]
    DuplicateName(String),
}

/// Collects flag declarations into a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    all: Vec<Arc<dyn Flag>>,
    by_key: HashMap<String, Arc<dyn Flag>>,
    names: HashSet<String>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("flags", &self.all.len())
            .finish()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        RegistryBuilder {
            all: vec![],
            by_key: HashMap::new(),
            names: HashSet::new(),
        }
    }

    /// Append a flag, keeping declaration order.
    ///
    /// # Panics
    ///
    /// If a flag with the same key or name is already registered. Registries are
    /// built from declarations at startup, where a duplicate is a programming error
    /// that would otherwise shadow a flag in the key index.
    #[track_caller]
    pub fn register<F: Flag>(mut self, flag: F) -> Self {
        if let Err(e) = self.try_register(flag) {
            panic!("{e}");
        }
        self
    }

    /// Append a flag, or report why it can't be added. A rejected flag leaves
    /// the builder as it was.
    #[cfg_attr(
        feature = "tracing-instrument",
        tracing::instrument(skip_all, fields(key = flag.key()), err(level = tracing::Level::TRACE))
    )]
    pub fn try_register<F: Flag>(&mut self, flag: F) -> Result<&mut Self, RegistryError> {
        if self.by_key.contains_key(flag.key()) {
            return Err(RegistryError::DuplicateKey(flag.key().to_owned()));
        }

        if self.names.contains(flag.name()) {
            return Err(RegistryError::DuplicateName(flag.name().to_owned()));
        }

        tracing::trace!(
            key = flag.key(),
            name = flag.name(),
            kind = %flag.kind(),
            lifecycle = %flag.lifecycle(),
            "Registered feature flag"
        );

        let flag: Arc<dyn Flag> = Arc::new(flag);
        self.names.insert(flag.name().to_owned());
        self.by_key.insert(flag.key().to_owned(), flag.clone());
        self.all.push(flag);

        Ok(self)
    }

    #[cfg_attr(feature = "tracing-instrument", tracing::instrument(skip(self)))]
    pub fn build(self) -> Registry {
        debug_assert_eq!(self.all.len(), self.by_key.len());

        tracing::debug!(flags = self.all.len(), "Built the feature flag registry");

        Registry {
            all: self.all,
            by_key: self.by_key,
        }
    }
}
