//! Output sinks for rendered dumps
//!
//! The printer issues many small formatted writes per field and never
//! buffers on its own. Where the text ends up, and whether it is buffered,
//! is up to the sink. Write errors are not reported back to the printer.

use std::fmt;
use std::io;

use tracing::Level;

/// Destination for formatted dump output
pub trait Sink {
    /// Write one formatted fragment (not necessarily a whole line)
    fn emit(&mut self, args: fmt::Arguments<'_>);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        (**self).emit(args);
    }
}

impl Sink for String {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(self, args);
    }
}

/// Adapter for any [`fmt::Write`] destination
#[derive(Debug, Default)]
pub struct FmtSink<W: fmt::Write>(pub W);

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.0.write_fmt(args);
    }
}

/// Adapter for any [`io::Write`] destination (stdout, a serial port, a file)
#[derive(Debug)]
pub struct IoSink<W: io::Write>(pub W);

impl IoSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self(io::stdout())
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.0.write_fmt(args);
    }
}

/// Adapter for a closure receiving each fragment
pub struct FnSink<F: FnMut(fmt::Arguments<'_>)>(pub F);

impl<F: FnMut(fmt::Arguments<'_>)> Sink for FnSink<F> {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        (self.0)(args);
    }
}

/// Routes each completed line to a `tracing` event
///
/// Fragments are collected until a newline arrives. A trailing partial line
/// is flushed on drop.
#[derive(Debug)]
pub struct TracingSink {
    level: Level,
    line: String,
}

impl TracingSink {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            line: String::new(),
        }
    }

    fn flush_line(&mut self) {
        let line = self.line.as_str();
        if self.level == Level::ERROR {
            tracing::error!(target: "structdump", "{}", line);
        } else if self.level == Level::WARN {
            tracing::warn!(target: "structdump", "{}", line);
        } else if self.level == Level::INFO {
            tracing::info!(target: "structdump", "{}", line);
        } else if self.level == Level::DEBUG {
            tracing::debug!(target: "structdump", "{}", line);
        } else {
            tracing::trace!(target: "structdump", "{}", line);
        }
        self.line.clear();
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl Sink for TracingSink {
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(&mut self.line, args);
        while let Some(pos) = self.line.find('\n') {
            let rest = self.line.split_off(pos + 1);
            self.line.truncate(pos);
            self.flush_line();
            self.line = rest;
        }
    }
}

impl Drop for TracingSink {
    fn drop(&mut self) {
        if !self.line.is_empty() {
            self.flush_line();
        }
    }
}
