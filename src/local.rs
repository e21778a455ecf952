use core::cmp;
use core::fmt::{Arguments, Write as _};
use std::borrow::Cow;

use crate::config::{Config, ConfigBuilder};
use crate::format::{Formatter, Origin};
use crate::level::{ct_enabled, Level, STATIC_MAX_LEVEL};
use crate::record::{LogStream, NullSink, Record};
use crate::scope::ScopeGuard;
use crate::sink::Sink;

/// A logger with its own configuration and sink.
///
/// The global facility is one of these; extra instances are useful when a
/// subsystem needs its own writer or threshold.
#[derive(Debug)]
pub struct Logger {
    level: Level,
    die_level: Option<Level>,
    formatter: Formatter,
    sink: Sink,
}

impl Logger {
    /// Freezes `cfg` into a logger, deciding color once against its sink.
    ///
    /// The threshold is clamped to [`STATIC_MAX_LEVEL`].
    #[must_use]
    pub fn new(cfg: Config) -> Self {
        let use_color = cfg.use_color();
        Self {
            level: cmp::min(cfg.level, STATIC_MAX_LEVEL),
            die_level: cfg.die_level,
            formatter: Formatter::new(cfg.time_format, use_color),
            sink: cfg.sink,
        }
    }

    #[inline]
    #[must_use]
    /// Create a new builder
    pub fn builder() -> ConfigBuilder {
        Config::builder()
    }

    /// Active threshold.
    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Terminate threshold.
    #[inline]
    #[must_use]
    pub const fn die_level(&self) -> Option<Level> {
        self.die_level
    }

    #[inline]
    pub(crate) const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    #[inline]
    pub(crate) const fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Whether a record at `l` would be written.
    #[inline]
    #[must_use]
    pub const fn enabled(&self, l: Level) -> bool {
        ct_enabled(l) && l.is_enabled(self.level)
    }

    /// Opens a record at `l`, or a [`NullSink`] when `l` is disabled.
    #[inline]
    pub fn stream(&self, l: Level, origin: Origin) -> LogStream<'_> {
        if self.enabled(l) {
            LogStream::Live(Record::new(self, l, origin))
        } else {
            LogStream::Null(NullSink)
        }
    }

    /// Writes one record with `args` as its body.
    pub fn emit(&self, l: Level, origin: Origin, args: Arguments<'_>) {
        if !self.enabled(l) {
            return;
        }
        let mut rec = Record::new(self, l, origin);
        let _ = rec.write_fmt(args);
    }

    /// Opens a traced scope; see [`ScopeGuard`].
    pub fn scope(&self, name: impl Into<Cow<'static, str>>, origin: Origin) -> ScopeGuard<'_> {
        ScopeGuard::enter(self, name, origin)
    }
}

impl ConfigBuilder {
    /// Build a logger from this configuration
    #[must_use]
    pub fn build_logger(self) -> Logger {
        Logger::new(self.build())
    }

    /// Build the logger and leak it
    #[must_use]
    pub fn build_static(self) -> &'static Logger {
        Box::leak(Box::new(self.build_logger()))
    }
}

// ===== Macros (require a logger argument) ====================================
// Kept here and re-exported below, so `use lightlog::local::info;
// info!(lg, "...")` does not collide with the root `lightlog::info!`.

#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_log {
    ($lg:expr, $lvl:expr $(,)?) => {{
        $lg.stream($lvl, $crate::origin!())
    }};
    ($lg:expr, $lvl:expr, $($t:tt)+) => {{
        let __lvl: $crate::Level = $lvl;
        if $crate::ct_enabled(__lvl) {
            let __lg = $lg; // evaluate once
            if __lg.enabled(__lvl) {
                __lg.emit(__lvl, $crate::origin!(), format_args!($($t)+));
            }
        }
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_fatal { ($lg:expr $(,)?) => { $crate::__lightlog_local_log!($lg, $crate::Level::Fatal) }; ($lg:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($lg, $crate::Level::Fatal, $($t)+) } }
#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_error { ($lg:expr $(,)?) => { $crate::__lightlog_local_log!($lg, $crate::Level::Error) }; ($lg:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($lg, $crate::Level::Error, $($t)+) } }
#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_warning { ($lg:expr $(,)?) => { $crate::__lightlog_local_log!($lg, $crate::Level::Warning) }; ($lg:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($lg, $crate::Level::Warning, $($t)+) } }
#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_info { ($lg:expr $(,)?) => { $crate::__lightlog_local_log!($lg, $crate::Level::Info) }; ($lg:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($lg, $crate::Level::Info, $($t)+) } }
#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_debug { ($lg:expr $(,)?) => { $crate::__lightlog_local_log!($lg, $crate::Level::Debug) }; ($lg:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($lg, $crate::Level::Debug, $($t)+) } }
#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_verbose { ($lg:expr $(,)?) => { $crate::__lightlog_local_log!($lg, $crate::Level::Verbose) }; ($lg:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($lg, $crate::Level::Verbose, $($t)+) } }

#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_check_that {
    ($lg:expr, $cond:expr $(,)?) => {
        if !($cond) {
            $crate::__lightlog_local_log!($lg, $crate::Level::Error, "CHECK_THAT({})", stringify!($cond));
        }
    };
    ($lg:expr, $cond:expr, $($t:tt)+) => {
        if !($cond) {
            $crate::__lightlog_local_log!(
                $lg,
                $crate::Level::Error,
                "CHECK_THAT({}): {}",
                stringify!($cond),
                format_args!($($t)+)
            );
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_look {
    ($lg:expr, $var:expr $(,)?) => {
        $crate::__lightlog_local_log!($lg, $crate::Level::Info, "LOOK: {} = {:?}", stringify!($var), &$var)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __lightlog_local_trace_scope {
    ($lg:expr $(,)?) => {
        let _lightlog_scope_guard = $lg.scope($crate::function_name!(), $crate::origin!());
    };
    ($lg:expr, $name:expr $(,)?) => {
        let _lightlog_scope_guard = $lg.scope($name, $crate::origin!());
    };
}

// Import style: `use lightlog::local::info; info!(logger, "...");`
pub use crate::__lightlog_local_check_that as check_that;
pub use crate::__lightlog_local_debug as debug;
pub use crate::__lightlog_local_error as error;
pub use crate::__lightlog_local_fatal as fatal;
pub use crate::__lightlog_local_info as info;
pub use crate::__lightlog_local_log as log;
pub use crate::__lightlog_local_look as look;
pub use crate::__lightlog_local_trace_scope as trace_scope;
pub use crate::__lightlog_local_verbose as verbose;
pub use crate::__lightlog_local_warning as warning;
pub use crate::__lightlog_local_warning as warn;
