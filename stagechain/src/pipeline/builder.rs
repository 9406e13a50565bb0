//! The fluent pipeline builder and executor.

use super::chain;
use super::failure::{self, CompletionHook, ExceptionHandler};
use super::PipelineConfig;
use crate::errors::{ConfigurationError, PipelineError, PipelineResult};
use crate::resolver::Resolver;
use crate::stages::{Pipe, DEFAULT_METHOD};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends a payload through an ordered list of stages.
///
/// Every configuration method consumes the pipeline and returns it, so calls
/// chain. Nothing runs until [`Pipeline::then`] or [`Pipeline::then_return`].
///
/// Each stage receives a clone of the payload. Use a shared handle such as
/// `Arc<Mutex<T>>` when mutations made by one stage must be visible to later
/// stages, the hooks and the caller.
///
/// ```rust
/// use stagechain::prelude::*;
///
/// let result = Pipeline::new()
///     .send(2_u32)
///     .through([
///         Pipe::closure(|n: u32, next| next.run(n + 1)),
///         Pipe::closure(|n: u32, next| next.run(n * 10)),
///     ])
///     .then(|n| Ok(n + 5))
///     .unwrap();
///
/// assert_eq!(result, 35);
/// ```
pub struct Pipeline<P, R = P> {
    payload: Option<P>,
    stages: Vec<Pipe<P, R>>,
    method: String,
    exception_handler: Option<ExceptionHandler<P, R>>,
    completion_hook: Option<CompletionHook<P>>,
    resolver: Option<Arc<dyn Resolver<P, R>>>,
}

impl<P, R> Pipeline<P, R> {
    /// Creates a pipeline without a resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            payload: None,
            stages: Vec::new(),
            method: DEFAULT_METHOD.to_string(),
            exception_handler: None,
            completion_hook: None,
            resolver: None,
        }
    }

    /// Creates a pipeline that resolves identifier stages through `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: Arc<dyn Resolver<P, R>>) -> Self {
        Self::new().set_resolver(resolver)
    }

    /// Applies a configuration.
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.method = config.method;
        self
    }

    /// Attaches or replaces the resolver.
    #[must_use]
    pub fn set_resolver(mut self, resolver: Arc<dyn Resolver<P, R>>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Sets the payload sent through the pipeline.
    #[must_use]
    pub fn send(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Replaces the stage list.
    #[must_use]
    pub fn through<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Pipe<P, R>>,
    {
        self.stages = stages.into_iter().map(Into::into).collect();
        self
    }

    /// Appends stages to the stage list.
    #[must_use]
    pub fn pipe<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Pipe<P, R>>,
    {
        self.stages.extend(stages.into_iter().map(Into::into));
        self
    }

    /// Sets the method called on object and identifier stages.
    #[must_use]
    pub fn via(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Applies `configurator` when `condition` holds.
    #[must_use]
    pub fn when<F>(self, condition: bool, configurator: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            configurator(self)
        } else {
            self
        }
    }

    /// Applies `configurator` unless `condition` holds.
    #[must_use]
    pub fn unless<F>(self, condition: bool, configurator: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.when(!condition, configurator)
    }

    /// Registers the exception handler, replacing any previous one.
    ///
    /// The handler receives the payload and the stage error; its return value
    /// becomes the result of the run.
    #[must_use]
    pub fn catch<F>(mut self, handler: F) -> Self
    where
        F: Fn(P, PipelineError) -> PipelineResult<R> + Send + Sync + 'static,
    {
        self.exception_handler = Some(Arc::new(handler));
        self
    }

    /// Registers the completion hook, replacing any previous one.
    ///
    /// The hook runs once per run, after the chain and any exception handler,
    /// whether the run succeeded or failed.
    #[must_use]
    pub fn finally<F>(mut self, hook: F) -> Self
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        self.completion_hook = Some(Arc::new(hook));
        self
    }

    /// Returns the resolver, if any.
    #[must_use]
    pub fn resolver(&self) -> Option<&Arc<dyn Resolver<P, R>>> {
        self.resolver.as_ref()
    }

    /// Returns the configured method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the number of configured stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the payload, if one was sent.
    #[must_use]
    pub const fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

impl<P: Clone, R> Pipeline<P, R> {
    /// Runs the pipeline with `destination` as the final stage.
    ///
    /// Stages are resolved first; a configuration error is returned before
    /// any stage runs and bypasses both the exception handler and the
    /// completion hook.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Configuration`] when the pipeline cannot be
    /// prepared, or the stage error when a stage or the destination fails and
    /// no exception handler is registered.
    pub fn then<D>(&self, destination: D) -> PipelineResult<R>
    where
        D: Fn(P) -> PipelineResult<R>,
    {
        let payload = self
            .payload
            .clone()
            .ok_or(ConfigurationError::MissingPayload)?;

        let stages = match chain::resolve_all(&self.stages, &self.method, self.resolver.as_deref()) {
            Ok(stages) => stages,
            Err(err) => {
                warn!(error = %err, method = %self.method, "Pipeline configuration error");
                return Err(err.into());
            }
        };

        let handler = self.exception_handler.clone();
        let hook = self.completion_hook.clone();

        debug!(stages = stages.len(), method = %self.method, "Running pipeline");

        let continuation = chain::assemble(&stages, &self.method, &destination);

        failure::with_completion_hook(hook.as_deref(), &payload, || {
            failure::with_exception_handler(handler.as_deref(), &payload, || continuation(payload.clone()))
        })
    }
}

impl<P: Clone> Pipeline<P, P> {
    /// Runs the pipeline and returns the payload the last stage forwarded.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::then`].
    pub fn then_return(&self) -> PipelineResult<P> {
        self.then(Ok)
    }
}

impl<P, R> Default for Pipeline<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R> fmt::Debug for Pipeline<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .field("method", &self.method)
            .field("has_payload", &self.payload.is_some())
            .field("has_exception_handler", &self.exception_handler.is_some())
            .field("has_completion_hook", &self.completion_hook.is_some())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}
