//! Console implementation of the logging capability

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::sink::LogSink;

/// Logger writing labelled context/message lines to an output stream.
///
/// The stored `context_id` and `description` are constructor state only:
/// [`LogSink::log`] prints its own arguments and never consults them. The
/// second output label reads `Description` but carries the message argument.
/// Both quirks are part of the observable contract and are kept as-is.
///
/// Dropping the logger writes a destruction notice to the same stream,
/// exactly once, on every exit path from the owning scope.
pub struct ConsoleLogger {
    context_id: String,
    description: String,
    out: Box<dyn Write>,
}

impl ConsoleLogger {
    /// Create a logger for `context_id` with an empty description,
    /// writing to standard output.
    pub fn new(context_id: impl Into<String>) -> Self {
        let context_id = context_id.into();
        debug!("console logger created for context {}", context_id);
        Self {
            context_id,
            description: String::new(),
            out: Box::new(io::stdout()),
        }
    }

    /// Set the stored description (defaults to the empty string).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Redirect output to another writer (standard output by default).
    ///
    /// Changes where the bytes go, never what they are.
    pub fn with_writer(mut self, out: impl Write + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    /// The context id supplied at construction. Not consulted by `log`.
    pub fn context_id(&self) -> &str {
        &self.context_id
    }

    /// The description supplied at construction. Not consulted by `log`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Diagnostic probe: writes a fixed line, ignoring its argument.
    pub fn foo(&mut self, _message: &str) {
        let _ = writeln!(self.out, "foo ");
    }
}

impl LogSink for ConsoleLogger {
    fn log(&mut self, context_id: &str, message: &str) {
        trace!("log record for context {}", context_id);
        // Stream-level write errors are ignored, not surfaced.
        let _ = writeln!(self.out, "Context ID: {}", context_id);
        let _ = writeln!(self.out, "Description: {}", message);
    }
}

impl Drop for ConsoleLogger {
    fn drop(&mut self) {
        debug!("console logger dropped for context {}", self.context_id);
        let _ = writeln!(self.out, "Logger is being destructed! ");
    }
}
