//! Records and the streams call sites write into.
//!
//! A [`Record`] is built by one log call, collects that call's content, and
//! writes itself out when it is dropped at the end of the statement. Disabled
//! calls get a [`NullSink`] instead, which never formats and never writes.

use core::fmt::{self, Display, Write as _};

use chrono::Local;

use crate::format::Origin;
use crate::level::Level;
use crate::local::Logger;
use crate::scope;
use crate::sink::{Sink, Target};

/// Exit status used when a record reaches the terminate threshold.
pub const FAILURE_STATUS: i32 = 1;

/// One pending log line.
pub struct Record<'a> {
    logger: &'a Logger,
    level: Level,
    buf: String,
}

impl<'a> Record<'a> {
    /// Starts a record, stamping the preamble with the current local time and
    /// the thread's scope depth. Callers are expected to have checked
    /// [`Logger::enabled`] already.
    #[must_use]
    pub fn new(logger: &'a Logger, level: Level, origin: Origin) -> Self {
        let mut buf = String::with_capacity(96);
        logger
            .formatter()
            .write(&mut buf, level, &origin, scope::raw_depth(), &Local::now());
        Self { logger, level, buf }
    }

    /// Appends the text form of `v`.
    #[allow(clippy::return_self_not_must_use)]
    pub fn append(mut self, v: impl Display) -> Self {
        let _ = write!(self.buf, "{v}");
        self
    }

    /// The record's severity.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Everything written so far, preamble included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buf
    }
}

impl fmt::Write for Record<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Drop for Record<'_> {
    fn drop(&mut self) {
        self.buf.push('\n');
        let die = self.level.should_terminate(self.logger.die_level());
        let sink = self.logger.sink();
        let written = sink.write_line(self.buf.as_bytes());
        if written.is_err() && die && sink.target() != Target::Stderr {
            // a fatal line must surface somewhere before the process goes away
            let _ = Sink::stderr().write_line(self.buf.as_bytes());
        }
        if die {
            std::process::exit(FAILURE_STATUS);
        }
    }
}

/// Stand-in for a disabled record: discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl NullSink {
    /// Discards `v` without formatting it.
    #[inline]
    #[allow(clippy::return_self_not_must_use)]
    pub fn append(self, v: impl Display) -> Self {
        let _ = v;
        self
    }
}

impl fmt::Write for NullSink {
    #[inline]
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Ok(())
    }
    #[inline]
    fn write_fmt(&mut self, _: fmt::Arguments<'_>) -> fmt::Result {
        Ok(())
    }
}

/// What a streaming log call hands back.
///
/// ```
/// use lightlog::{log, Level};
/// log!(Level::Info).append("answer=").append(42);
/// ```
pub enum LogStream<'a> {
    /// Enabled: written out on drop.
    Live(Record<'a>),
    /// Disabled: inert.
    Null(NullSink),
}

impl LogStream<'_> {
    /// Appends the text form of `v`.
    #[inline]
    #[allow(clippy::return_self_not_must_use)]
    pub fn append(self, v: impl Display) -> Self {
        match self {
            Self::Live(r) => Self::Live(r.append(v)),
            Self::Null(n) => Self::Null(n.append(v)),
        }
    }

    /// Whether this stream will produce a line.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

impl fmt::Write for LogStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self {
            Self::Live(r) => r.write_str(s),
            Self::Null(n) => n.write_str(s),
        }
    }
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        match self {
            Self::Live(r) => r.write_fmt(args),
            Self::Null(n) => n.write_fmt(args),
        }
    }
}
