//! Mock stages for testing.

use parking_lot::Mutex;

use crate::errors::{PipelineError, PipelineResult};
use crate::stages::{Next, Stage, DEFAULT_METHOD};

/// A stage that records every payload it sees and forwards it unchanged.
///
/// Answers to `handle` unless other method names are configured.
#[derive(Debug)]
pub struct RecordingStage<P> {
    name: String,
    methods: Vec<String>,
    seen: Mutex<Vec<P>>,
    calls: Mutex<Vec<String>>,
}

impl<P> RecordingStage<P> {
    /// Creates a new recording stage answering to `handle`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: vec![DEFAULT_METHOD.to_string()],
            seen: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the method names the stage answers to.
    #[must_use]
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the method names called, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Returns the number of times the stage ran.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl<P: Clone> RecordingStage<P> {
    /// Returns every payload seen, in order.
    #[must_use]
    pub fn seen(&self) -> Vec<P> {
        self.seen.lock().clone()
    }
}

impl<P, R> Stage<P, R> for RecordingStage<P>
where
    P: Clone + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn responds_to(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    fn call(
        &self,
        method: &str,
        payload: P,
        next: Next<'_, P, R>,
        _parameters: &[String],
    ) -> PipelineResult<R> {
        self.seen.lock().push(payload.clone());
        self.calls.lock().push(method.to_string());
        next.run(payload)
    }
}

/// A stage with no named methods that is invoked directly.
#[derive(Debug)]
pub struct InvokableStage<P> {
    name: String,
    seen: Mutex<Vec<P>>,
}

impl<P> InvokableStage<P> {
    /// Creates a new invokable stage.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl<P: Clone> InvokableStage<P> {
    /// Returns every payload seen, in order.
    #[must_use]
    pub fn seen(&self) -> Vec<P> {
        self.seen.lock().clone()
    }
}

impl<P, R> Stage<P, R> for InvokableStage<P>
where
    P: Clone + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_invokable(&self) -> bool {
        true
    }

    fn invoke(&self, payload: P, next: Next<'_, P, R>) -> PipelineResult<R> {
        self.seen.lock().push(payload.clone());
        next.run(payload)
    }
}

/// A stage that records the identifier parameters it was called with.
#[derive(Debug, Default)]
pub struct ParameterStage {
    parameters: Mutex<Vec<Vec<String>>>,
}

impl ParameterStage {
    /// Creates a new parameter stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parameter lists from each call.
    #[must_use]
    pub fn parameters(&self) -> Vec<Vec<String>> {
        self.parameters.lock().clone()
    }
}

impl<P, R> Stage<P, R> for ParameterStage {
    fn name(&self) -> &str {
        "ParameterStage"
    }

    fn responds_to(&self, method: &str) -> bool {
        method == DEFAULT_METHOD
    }

    fn call(
        &self,
        _method: &str,
        payload: P,
        next: Next<'_, P, R>,
        parameters: &[String],
    ) -> PipelineResult<R> {
        self.parameters.lock().push(parameters.to_vec());
        next.run(payload)
    }
}

/// A stage that always fails.
#[derive(Debug)]
pub struct FailingStage {
    name: String,
    error: String,
}

impl FailingStage {
    /// Creates a new failing stage.
    #[must_use]
    pub fn new(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: error.into(),
        }
    }
}

impl<P, R> Stage<P, R> for FailingStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn responds_to(&self, method: &str) -> bool {
        method == DEFAULT_METHOD
    }

    fn call(
        &self,
        _method: &str,
        _payload: P,
        _next: Next<'_, P, R>,
        _parameters: &[String],
    ) -> PipelineResult<R> {
        Err(PipelineError::stage(self.error.clone()))
    }
}

/// A stage that returns a fixed value without calling `next`.
#[derive(Debug)]
pub struct HaltingStage<R> {
    value: R,
}

impl<R> HaltingStage<R> {
    /// Creates a new halting stage.
    #[must_use]
    pub const fn new(value: R) -> Self {
        Self { value }
    }
}

impl<P, R> Stage<P, R> for HaltingStage<R>
where
    R: Clone + Send + Sync,
{
    fn name(&self) -> &str {
        "HaltingStage"
    }

    fn responds_to(&self, method: &str) -> bool {
        method == DEFAULT_METHOD
    }

    fn call(
        &self,
        _method: &str,
        _payload: P,
        _next: Next<'_, P, R>,
        _parameters: &[String],
    ) -> PipelineResult<R> {
        Ok(self.value.clone())
    }
}
