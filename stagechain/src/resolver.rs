//! Resolution of identifier stages.
//!
//! The pipeline only needs "give me an instance for this identifier". Any
//! container can plug in by implementing [`Resolver`]; [`StageRegistry`] is a
//! small in-memory implementation backed by instances and factories.

use crate::errors::ConfigurationError;
use crate::stages::Stage;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Produces stage instances from identifiers.
pub trait Resolver<P, R>: Send + Sync {
    /// Resolves an identifier to a stage instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Unresolvable`] when no instance can be
    /// produced.
    fn resolve(&self, identifier: &str) -> Result<Arc<dyn Stage<P, R>>, ConfigurationError>;
}

/// Factory function type for creating stages on demand.
pub type StageFactory<P, R> = Box<dyn Fn() -> Arc<dyn Stage<P, R>> + Send + Sync>;

/// Registry of stage instances and factories.
///
/// Instances are shared between resolutions. Factories build a fresh stage
/// every time the identifier is resolved. When both exist for a name, the
/// instance wins.
pub struct StageRegistry<P, R> {
    instances: RwLock<HashMap<String, Arc<dyn Stage<P, R>>>>,
    factories: RwLock<HashMap<String, StageFactory<P, R>>>,
}

impl<P, R> StageRegistry<P, R> {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a shared stage instance.
    pub fn register(&self, name: impl Into<String>, stage: Arc<dyn Stage<P, R>>) {
        self.instances.write().insert(name.into(), stage);
    }

    /// Registers a stage value, wrapping it in an `Arc`.
    pub fn register_stage<S>(&self, name: impl Into<String>, stage: S)
    where
        S: Stage<P, R> + 'static,
    {
        self.register(name, Arc::new(stage));
    }

    /// Registers a factory for lazy stage construction.
    pub fn register_factory<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Stage<P, R>> + Send + Sync + 'static,
    {
        self.factories.write().insert(name.into(), Box::new(factory));
    }

    /// Checks if a name can be resolved.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.instances.read().contains_key(name) || self.factories.read().contains_key(name)
    }

    /// Lists every resolvable name, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .instances
            .read()
            .keys()
            .chain(self.factories.read().keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Clears all registrations.
    pub fn clear(&self) {
        self.instances.write().clear();
        self.factories.write().clear();
    }
}

impl<P, R> Default for StageRegistry<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R> Resolver<P, R> for StageRegistry<P, R> {
    fn resolve(&self, identifier: &str) -> Result<Arc<dyn Stage<P, R>>, ConfigurationError> {
        if let Some(stage) = self.instances.read().get(identifier) {
            return Ok(Arc::clone(stage));
        }

        let factories = self.factories.read();
        factories.get(identifier).map(|factory| factory()).ok_or_else(|| {
            ConfigurationError::unresolvable(identifier, "no stage registered under this name")
        })
    }
}

impl<P, R> fmt::Debug for StageRegistry<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageRegistry")
            .field("instance_count", &self.instances.read().len())
            .field("factory_count", &self.factories.read().len())
            .finish()
    }
}
