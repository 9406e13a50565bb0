//! Stage trait, continuations and stage specifications.
//!
//! Stages are the units of work threaded together by a pipeline. Each one
//! receives the payload together with a [`Next`] continuation and decides
//! whether to forward the payload, return early, or fail.

mod identifier;
mod pipe;

pub use identifier::StageIdentifier;
pub use pipe::{Pipe, StageFn};

use crate::errors::{ConfigurationError, PipelineResult};
use std::fmt;

/// The method name used when none is configured with `via`.
pub const DEFAULT_METHOD: &str = "handle";

/// Trait for object stages.
///
/// An object stage exposes up to two capabilities:
///
/// - **named methods**: `responds_to(method)` reports whether a method of that
///   name exists, and `call` dispatches to it with any identifier parameters
///   appended after the payload and continuation.
/// - **direct invocation**: `is_invokable` reports whether the stage can be
///   called as a plain `(payload, next)` function through `invoke`.
///
/// A pipeline prefers the named method and falls back to direct invocation.
/// A stage offering neither is a configuration error.
pub trait Stage<P, R>: Send + Sync {
    /// Returns the name of the stage, used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns true if the stage has a method with the given name.
    fn responds_to(&self, _method: &str) -> bool {
        false
    }

    /// Calls the named method.
    fn call(
        &self,
        method: &str,
        _payload: P,
        _next: Next<'_, P, R>,
        _parameters: &[String],
    ) -> PipelineResult<R> {
        Err(ConfigurationError::not_callable(self.name(), method).into())
    }

    /// Returns true if the stage can be invoked directly.
    fn is_invokable(&self) -> bool {
        false
    }

    /// Invokes the stage directly.
    fn invoke(&self, _payload: P, _next: Next<'_, P, R>) -> PipelineResult<R> {
        Err(ConfigurationError::not_callable(self.name(), "invoke").into())
    }
}

/// The continuation handed to every stage.
///
/// Calling [`Next::run`] forwards a payload to the rest of the chain and
/// returns whatever the rest of the chain produced. Not calling it stops the
/// chain at the current stage.
pub struct Next<'a, P, R> {
    inner: &'a (dyn Fn(P) -> PipelineResult<R> + 'a),
}

impl<'a, P, R> Next<'a, P, R> {
    pub(crate) fn new(inner: &'a (dyn Fn(P) -> PipelineResult<R> + 'a)) -> Self {
        Self { inner }
    }

    /// Passes the payload to the remainder of the chain.
    pub fn run(&self, payload: P) -> PipelineResult<R> {
        (self.inner)(payload)
    }
}

impl<P, R> Clone for Next<'_, P, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, R> Copy for Next<'_, P, R> {}

impl<P, R> fmt::Debug for Next<'_, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next").finish_non_exhaustive()
    }
}
