//! Stage resolution and right-to-left chain assembly.

use crate::errors::{ConfigurationError, PipelineResult};
use crate::resolver::Resolver;
use crate::stages::{Next, Pipe, Stage, StageFn};
use std::sync::Arc;
use tracing::trace;

/// A composed continuation from a payload to the final result.
pub(crate) type Continuation<'a, P, R> = Box<dyn Fn(P) -> PipelineResult<R> + 'a>;

/// A stage specification resolved into something callable.
pub(crate) enum ResolvedStage<P, R> {
    Closure(StageFn<P, R>),
    Method {
        stage: Arc<dyn Stage<P, R>>,
        parameters: Vec<String>,
    },
    Invokable(Arc<dyn Stage<P, R>>),
}

impl<P, R> ResolvedStage<P, R> {
    /// Resolves a single specification.
    pub(crate) fn resolve(
        pipe: &Pipe<P, R>,
        method: &str,
        resolver: Option<&dyn Resolver<P, R>>,
    ) -> Result<Self, ConfigurationError> {
        match pipe {
            Pipe::Closure(func) => Ok(Self::Closure(Arc::clone(func))),
            Pipe::Instance(stage) => Self::from_instance(Arc::clone(stage), method, Vec::new()),
            Pipe::Identifier(id) => {
                let resolver = resolver.ok_or(ConfigurationError::MissingResolver)?;
                let stage = resolver.resolve(id.name())?;
                Self::from_instance(stage, method, id.parameters().to_vec())
            }
        }
    }

    fn from_instance(
        stage: Arc<dyn Stage<P, R>>,
        method: &str,
        parameters: Vec<String>,
    ) -> Result<Self, ConfigurationError> {
        if stage.responds_to(method) {
            Ok(Self::Method { stage, parameters })
        } else if stage.is_invokable() {
            Ok(Self::Invokable(stage))
        } else {
            Err(ConfigurationError::not_callable(stage.name(), method))
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Closure(_) => "closure",
            Self::Method { .. } => "method",
            Self::Invokable(_) => "invokable",
        }
    }

    fn invoke(&self, method: &str, payload: P, next: Next<'_, P, R>) -> PipelineResult<R> {
        match self {
            Self::Closure(func) => func(payload, next),
            Self::Method { stage, parameters } => stage.call(method, payload, next, parameters),
            Self::Invokable(stage) => stage.invoke(payload, next),
        }
    }
}

/// Resolves every specification, failing on the first configuration error.
pub(crate) fn resolve_all<P, R>(
    pipes: &[Pipe<P, R>],
    method: &str,
    resolver: Option<&dyn Resolver<P, R>>,
) -> Result<Vec<ResolvedStage<P, R>>, ConfigurationError> {
    pipes
        .iter()
        .map(|pipe| ResolvedStage::resolve(pipe, method, resolver))
        .collect()
}

/// Folds resolved stages right-to-left around the destination.
///
/// The continuation for stage `i` invokes it with a [`Next`] wrapping the
/// continuation for stage `i + 1`; the last one wraps `destination`.
pub(crate) fn assemble<'a, P, R>(
    stages: &'a [ResolvedStage<P, R>],
    method: &'a str,
    destination: &'a dyn Fn(P) -> PipelineResult<R>,
) -> Continuation<'a, P, R>
where
    P: 'a,
    R: 'a,
{
    let terminal: Continuation<'a, P, R> = Box::new(move |payload| destination(payload));

    stages
        .iter()
        .enumerate()
        .rev()
        .fold(terminal, |next, (index, stage)| {
            let continuation: Continuation<'a, P, R> = Box::new(move |payload| {
                trace!(index, kind = stage.kind(), "Entering stage");
                stage.invoke(method, payload, Next::new(&*next))
            });
            continuation
        })
}
