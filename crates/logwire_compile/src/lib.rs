//! LOGWIRE Compilation Pipeline
//!
//! Compiles subscription filter events into resource fragments inside a
//! shared deployment template: settings validation, pre-flight conflict
//! detection against deployed state, paginated identifier resolution, and
//! deterministic fragment construction with explicit dependency ordering.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod compiler;
pub mod error;
pub mod limits;
pub mod resolve;

pub use builder::FragmentBuilder;
pub use compiler::{Compiler, CompilerConfig, CompilerOutput};
pub use error::{CompileError, CompileResult};
pub use limits::LimitChecker;
pub use resolve::{LogGroupResolver, DEFAULT_MAX_PAGES};
