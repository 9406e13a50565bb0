//! # Stagechain
//!
//! A sequential continuation pipeline.
//!
//! A payload is sent through an ordered list of stages. Each stage receives
//! the payload and a `next` continuation and either forwards the payload,
//! returns early, or fails. Stages may be given as:
//!
//! - **Closures** taking `(payload, next)`
//! - **Objects** implementing [`stages::Stage`], called through a named
//!   method (`handle` unless changed with `via`) or invoked directly
//! - **Identifiers** such as `"Throttle:60,1"`, resolved at run time through a
//!   [`resolver::Resolver`] and called with the parameters appended
//!
//! Runs may be wrapped with an exception handler (`catch`) and a completion
//! hook (`finally`).
//!
//! ## Quick Start
//!
//! ```rust
//! use stagechain::prelude::*;
//!
//! let result = Pipeline::new()
//!     .send("hello".to_string())
//!     .through([
//!         Pipe::closure(|s: String, next| next.run(s.to_uppercase())),
//!         Pipe::closure(|s: String, next| next.run(format!("{s}!"))),
//!     ])
//!     .then_return()
//!     .unwrap();
//!
//! assert_eq!(result, "HELLO!");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod hub;
pub mod observability;
pub mod pipeline;
pub mod resolver;
pub mod stages;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::{ConfigurationError, PipelineError, PipelineResult};
    pub use crate::hub::Hub;
    pub use crate::pipeline::{Pipeline, PipelineConfig};
    pub use crate::resolver::{Resolver, StageRegistry};
    pub use crate::stages::{Next, Pipe, Stage, StageIdentifier, DEFAULT_METHOD};
}
