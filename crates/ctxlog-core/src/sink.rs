//! Logging capability contract
//!
//! This trait defines the interface for recording a record without
//! specifying the backend (console, in-memory, etc.)

/// Contract for recording a context-identifier/message pair.
///
/// The contract is total: any two strings are valid input, including the
/// empty string, and `log` must not panic or fail. Where the record goes is
/// up to the implementation. Single-threaded use only; the contract makes no
/// thread-safety promises.
pub trait LogSink {
    /// Record `message` under `context_id`.
    fn log(&mut self, context_id: &str, message: &str);
}
