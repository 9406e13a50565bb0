//! Stage specifications accepted by `through` and `pipe`.

use super::{Next, Stage, StageIdentifier};
use crate::errors::PipelineResult;
use std::fmt;
use std::sync::Arc;

/// A closure stage taking `(payload, next)`.
pub type StageFn<P, R> = Arc<dyn Fn(P, Next<'_, P, R>) -> PipelineResult<R> + Send + Sync>;

/// A stage specification.
///
/// Specifications are resolved lazily, when the pipeline runs, so an
/// identifier may be registered before the resolver that knows it.
pub enum Pipe<P, R> {
    /// A closure invoked directly with `(payload, next)`.
    Closure(StageFn<P, R>),
    /// An already-constructed stage object.
    Instance(Arc<dyn Stage<P, R>>),
    /// A stage resolved by identifier when the pipeline runs.
    Identifier(StageIdentifier),
}

impl<P, R> Pipe<P, R> {
    /// Creates a closure stage.
    pub fn closure<F>(func: F) -> Self
    where
        F: Fn(P, Next<'_, P, R>) -> PipelineResult<R> + Send + Sync + 'static,
    {
        Self::Closure(Arc::new(func))
    }

    /// Creates an object stage.
    pub fn instance<S>(stage: S) -> Self
    where
        S: Stage<P, R> + 'static,
    {
        Self::Instance(Arc::new(stage))
    }

    /// Creates an object stage from a stage the caller keeps a handle to.
    pub fn shared<S>(stage: Arc<S>) -> Self
    where
        S: Stage<P, R> + 'static,
    {
        Self::Instance(stage)
    }

    /// Creates an identifier stage from `Name` or `Name:a,b`.
    #[must_use]
    pub fn identifier(spec: &str) -> Self {
        Self::Identifier(StageIdentifier::parse(spec))
    }

    /// Returns a short label for the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Closure(_) => "closure",
            Self::Instance(_) => "instance",
            Self::Identifier(_) => "identifier",
        }
    }
}

impl<P, R> Clone for Pipe<P, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Closure(func) => Self::Closure(Arc::clone(func)),
            Self::Instance(stage) => Self::Instance(Arc::clone(stage)),
            Self::Identifier(id) => Self::Identifier(id.clone()),
        }
    }
}

impl<P, R> fmt::Debug for Pipe<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closure(_) => f.write_str("Closure"),
            Self::Instance(stage) => f.debug_tuple("Instance").field(&stage.name()).finish(),
            Self::Identifier(id) => f.debug_tuple("Identifier").field(id).finish(),
        }
    }
}

impl<P, R> From<&str> for Pipe<P, R> {
    fn from(spec: &str) -> Self {
        Self::identifier(spec)
    }
}

impl<P, R> From<String> for Pipe<P, R> {
    fn from(spec: String) -> Self {
        Self::identifier(&spec)
    }
}

impl<P, R> From<StageIdentifier> for Pipe<P, R> {
    fn from(id: StageIdentifier) -> Self {
        Self::Identifier(id)
    }
}

impl<P, R> From<Arc<dyn Stage<P, R>>> for Pipe<P, R> {
    fn from(stage: Arc<dyn Stage<P, R>>) -> Self {
        Self::Instance(stage)
    }
}
