//! Testing utilities for stagechain pipelines.
//!
//! Ready-made stages that record what they see, fail, or stop the chain.

mod mocks;

pub use mocks::{FailingStage, HaltingStage, InvokableStage, ParameterStage, RecordingStage};
