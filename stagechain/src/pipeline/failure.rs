//! Exception-handler and completion-hook layers around a chain run.
//!
//! A run is always wrapped as
//! `with_completion_hook(hook, with_exception_handler(handler, chain))`,
//! whatever order the two were registered in.

use crate::errors::{PipelineError, PipelineResult};
use std::sync::Arc;
use tracing::debug;

/// Handler turning a stage error into a result.
pub type ExceptionHandler<P, R> = Arc<dyn Fn(P, PipelineError) -> PipelineResult<R> + Send + Sync>;

/// Hook observing the payload once a run has finished.
pub type CompletionHook<P> = Arc<dyn Fn(&P) + Send + Sync>;

/// Runs `run`, routing a failure through `handler` when one is present.
///
/// The handler's return value, success or error, replaces the failure.
/// Configuration errors raised while the chain runs are never handled.
pub(crate) fn with_exception_handler<P, R, H, F>(
    handler: Option<&H>,
    payload: &P,
    run: F,
) -> PipelineResult<R>
where
    P: Clone,
    H: Fn(P, PipelineError) -> PipelineResult<R> + ?Sized,
    F: FnOnce() -> PipelineResult<R>,
{
    match (run(), handler) {
        (Err(err @ PipelineError::Configuration(_)), _) => Err(err),
        (Err(err), Some(handler)) => {
            debug!(error = %err, "Pipeline error passed to exception handler");
            handler(payload.clone(), err)
        }
        (result, _) => result,
    }
}

/// Runs `run`, then calls `hook` with the payload whatever the outcome.
///
/// The hook also runs while unwinding from a panic in `run`.
pub(crate) fn with_completion_hook<P, R, H, F>(
    hook: Option<&H>,
    payload: &P,
    run: F,
) -> PipelineResult<R>
where
    H: Fn(&P) + ?Sized,
    F: FnOnce() -> PipelineResult<R>,
{
    let _guard = HookGuard { hook, payload };
    run()
}

struct HookGuard<'a, P, H: Fn(&P) + ?Sized> {
    hook: Option<&'a H>,
    payload: &'a P,
}

impl<P, H: Fn(&P) + ?Sized> Drop for HookGuard<'_, P, H> {
    fn drop(&mut self) {
        if let Some(hook) = self.hook {
            hook(self.payload);
        }
    }
}
