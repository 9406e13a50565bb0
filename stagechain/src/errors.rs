//! Error types for stagechain pipelines.
//!
//! Two families exist: configuration errors, raised while a run is being
//! prepared and before any stage executes, and stage errors, raised by stage
//! bodies or by the destination while the chain runs.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// The main error type returned by pipeline runs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pipeline could not be prepared.
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    /// A stage or the destination failed.
    #[error(transparent)]
    Stage(anyhow::Error),
}

impl PipelineError {
    /// Creates a stage error from a message.
    #[must_use]
    pub fn stage(message: impl Into<String>) -> Self {
        Self::Stage(anyhow::Error::msg(message.into()))
    }

    /// Wraps an arbitrary error raised inside a stage.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Stage(anyhow::Error::new(error))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns the configuration error, if any.
    #[must_use]
    pub const fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::Stage(_) => None,
        }
    }

    /// Returns the underlying stage error, if any.
    #[must_use]
    pub const fn as_stage(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Stage(err) => Some(err),
            Self::Configuration(_) => None,
        }
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        Self::Stage(err)
    }
}

/// Errors raised while resolving stages or preparing a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// An identifier stage was configured but no resolver is attached.
    #[error("A resolver instance has not been supplied to the pipeline.")]
    MissingResolver,

    /// The pipeline was run before a payload was sent.
    #[error("No payload has been sent through the pipeline.")]
    MissingPayload,

    /// The resolver could not produce an instance for an identifier.
    #[error("Unable to resolve stage '{identifier}': {reason}")]
    Unresolvable {
        /// The identifier that failed.
        identifier: String,
        /// Why resolution failed.
        reason: String,
    },

    /// A stage exposes neither the configured method nor direct invocation.
    #[error("Stage '{stage}' has no method '{method}' and is not invokable")]
    NotCallable {
        /// The stage description.
        stage: String,
        /// The configured method name.
        method: String,
    },

    /// A hub was asked for a pipeline recipe it does not know.
    #[error("No pipeline named '{name}' is registered")]
    UnknownPipeline {
        /// The requested recipe name.
        name: String,
    },
}

impl ConfigurationError {
    /// Creates an unresolvable-identifier error.
    #[must_use]
    pub fn unresolvable(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unresolvable {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not-callable error.
    #[must_use]
    pub fn not_callable(stage: impl Into<String>, method: impl Into<String>) -> Self {
        Self::NotCallable {
            stage: stage.into(),
            method: method.into(),
        }
    }

    /// Creates an unknown-pipeline error.
    #[must_use]
    pub fn unknown_pipeline(name: impl Into<String>) -> Self {
        Self::UnknownPipeline { name: name.into() }
    }
}
