//! # Ctxlog Core Library
//!
//! Context-scoped console logging: a minimal capability contract for
//! recording context-identifier/message pairs, and a console-backed
//! implementation with scope-bound teardown.
//!
//! ## Modules
//!
//! - `sink` - The logging capability contract (`LogSink`)
//! - `console` - Console implementation writing labelled lines to standard output

pub mod console;
pub mod sink;

// Re-export commonly used types
pub use console::ConsoleLogger;
pub use sink::LogSink;
