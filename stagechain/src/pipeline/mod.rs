//! Pipeline building and execution.
//!
//! This module provides:
//! - The fluent [`Pipeline`] builder and executor
//! - Stage resolution and right-to-left chain assembly
//! - Exception-handler and completion-hook layers
//! - Pipeline configuration

mod builder;
mod chain;
mod config;
mod failure;

pub use builder::Pipeline;
pub use config::PipelineConfig;
pub use failure::{CompletionHook, ExceptionHandler};
