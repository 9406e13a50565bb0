//! Named pipeline recipes.
//!
//! A [`Hub`] keeps recipes that configure and run a fresh [`Pipeline`] for a
//! payload. Every pipeline it builds shares the hub's resolver.

use crate::errors::{ConfigurationError, PipelineResult};
use crate::pipeline::Pipeline;
use crate::resolver::Resolver;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Name of the recipe used when none is given.
pub const DEFAULT_RECIPE: &str = "default";

/// A recipe receiving a fresh pipeline and the payload.
pub type Recipe<P, R> = Arc<dyn Fn(Pipeline<P, R>, P) -> PipelineResult<R> + Send + Sync>;

/// Registry of named pipeline recipes.
pub struct Hub<P, R = P> {
    resolver: Option<Arc<dyn Resolver<P, R>>>,
    recipes: RwLock<HashMap<String, Recipe<P, R>>>,
}

impl<P, R> Hub<P, R> {
    /// Creates a hub whose pipelines use `resolver`.
    #[must_use]
    pub fn new(resolver: Option<Arc<dyn Resolver<P, R>>>) -> Self {
        Self {
            resolver,
            recipes: RwLock::new(HashMap::new()),
        }
    }

    /// Registers the default recipe.
    pub fn defaults<F>(&self, recipe: F)
    where
        F: Fn(Pipeline<P, R>, P) -> PipelineResult<R> + Send + Sync + 'static,
    {
        self.pipeline(DEFAULT_RECIPE, recipe);
    }

    /// Registers a named recipe, replacing any previous one.
    pub fn pipeline<F>(&self, name: impl Into<String>, recipe: F)
    where
        F: Fn(Pipeline<P, R>, P) -> PipelineResult<R> + Send + Sync + 'static,
    {
        self.recipes.write().insert(name.into(), Arc::new(recipe));
    }

    /// Checks if a recipe is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.recipes.read().contains_key(name)
    }

    /// Runs a payload through the named recipe, or the default one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownPipeline`] when the recipe does
    /// not exist, or whatever the recipe's pipeline returns.
    pub fn pipe(&self, payload: P, name: Option<&str>) -> PipelineResult<R> {
        let name = name.unwrap_or(DEFAULT_RECIPE);
        let recipe = self
            .recipes
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::unknown_pipeline(name))?;

        debug!(recipe = name, "Running hub pipeline");

        let pipeline = match &self.resolver {
            Some(resolver) => Pipeline::with_resolver(Arc::clone(resolver)),
            None => Pipeline::new(),
        };
        recipe(pipeline, payload)
    }
}

impl<P, R> fmt::Debug for Hub<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.recipes.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("Hub")
            .field("recipes", &names)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}
