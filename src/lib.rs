#![warn(missing_docs, unsafe_code)]
//! A light, embeddable logger.
//!
//! Call-site macros write one timestamped, leveled line per call to a single
//! diagnostic stream (stderr unless configured otherwise):
//!
//! ```text
//! [14:55:02][INFO ]:demo.rs  :  7:   answer=42
//! ```
//!
//! Lines are indented two spaces per live [`trace_scope!`] on the calling
//! thread, and any record at or above the terminate threshold (`FATAL` by
//! default) ends the process once it has been flushed.
//!
//! ```no_run
//! use lightlog::{check_that, info, look, trace_scope, Level};
//!
//! fn work(n: u32) -> u32 {
//!     trace_scope!();
//!     look!(n);
//!     check_that!(n > 0);
//!     n * 2
//! }
//!
//! info!("answer={}", work(21));
//! lightlog::log!(Level::Warning).append("streamed ").append(1);
//! ```

mod config;
mod error;
mod format;
mod level;
pub mod local;
mod record;
mod scope;
mod sink;

#[cfg(feature = "log")]
pub mod bridge;

use std::sync::OnceLock;

pub use config::{
    ColorMode, Config, ConfigBuilder, TimeFormat, DEFAULT_DIE_LEVEL, DEFAULT_LEVEL,
    DEFAULT_TIME_FORMAT, ENV_COLOR, ENV_DIE_LEVEL, ENV_LEVEL, ENV_TIME_FORMAT,
};
pub use error::{InitError, ParseColorModeError, ParseLevelError, TimeFormatError};
#[doc(hidden)]
pub use format::function_path as __function_path;
pub use format::{format_preamble, Formatter, Origin, FILE_WIDTH, INDENT_WIDTH, LINE_WIDTH};
pub use level::{
    ct_enabled, is_enabled, parse_die_level, should_terminate, Level, STATIC_MAX_LEVEL,
};
pub use local::Logger;
pub use record::{LogStream, NullSink, Record, FAILURE_STATUS};
pub use scope::{indent_depth, ScopeGuard, SCOPE_LEVEL};
pub use sink::{Sink, Target};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger.
///
/// Call this before the first log call; afterwards the configuration is fixed.
/// # Errors
/// Returns [`InitError::AlreadyInitialized`] if a logger is already installed,
/// either by an earlier `init` or implicitly by a log call.
pub fn init(cfg: Config) -> Result<(), InitError> {
    LOGGER
        .set(Logger::new(cfg))
        .map_err(|_| InitError::AlreadyInitialized)
}

/// Installs a logger resolved from `LIGHTLOG_*` variables.
/// # Errors
/// See [`init`].
pub fn init_from_env() -> Result<(), InitError> {
    init(Config::from_env())
}

/// The process-wide logger, resolved from the environment on first use.
#[inline]
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Config::from_env()))
}

/// Path of the enclosing function, e.g. `my_crate::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::__function_path(__type_name_of(__f))
    }};
}

/// The [`Origin`] of the invocation site.
#[macro_export]
macro_rules! origin {
    () => {
        $crate::Origin::new(file!(), line!()).with_function($crate::function_name!())
    };
}

/// Log at `level`.
///
/// `log!(level)` returns a [`LogStream`] to append to; the line is written
/// when the stream is dropped. `log!(level, fmt, args..)` writes right away
/// and does not evaluate `args` when `level` is disabled.
#[macro_export]
macro_rules! log {
    ($lvl:expr $(,)?) => { $crate::__lightlog_local_log!($crate::logger(), $lvl) };
    ($lvl:expr, $($t:tt)+) => { $crate::__lightlog_local_log!($crate::logger(), $lvl, $($t)+) };
}
/// fatal
#[macro_export]
macro_rules! fatal   { () => { $crate::log!($crate::Level::Fatal) };   ($($t:tt)+) => { $crate::log!($crate::Level::Fatal,   $($t)+) } }
/// error
#[macro_export]
macro_rules! error   { () => { $crate::log!($crate::Level::Error) };   ($($t:tt)+) => { $crate::log!($crate::Level::Error,   $($t)+) } }
/// warning
#[macro_export]
macro_rules! warning { () => { $crate::log!($crate::Level::Warning) }; ($($t:tt)+) => { $crate::log!($crate::Level::Warning, $($t)+) } }
/// warning, short name
#[macro_export]
macro_rules! warn    { () => { $crate::log!($crate::Level::Warning) }; ($($t:tt)+) => { $crate::log!($crate::Level::Warning, $($t)+) } }
/// info
#[macro_export]
macro_rules! info    { () => { $crate::log!($crate::Level::Info) };    ($($t:tt)+) => { $crate::log!($crate::Level::Info,    $($t)+) } }
/// debug
#[macro_export]
macro_rules! debug   { () => { $crate::log!($crate::Level::Debug) };   ($($t:tt)+) => { $crate::log!($crate::Level::Debug,   $($t)+) } }
/// verbose
#[macro_export]
macro_rules! verbose { () => { $crate::log!($crate::Level::Verbose) }; ($($t:tt)+) => { $crate::log!($crate::Level::Verbose, $($t)+) } }

/// Logs `CHECK_THAT(<expr>)` at ERROR when `expr` is false.
#[macro_export]
macro_rules! check_that {
    ($($t:tt)+) => { $crate::__lightlog_local_check_that!($crate::logger(), $($t)+) };
}

/// Logs `LOOK: <name> = <value:?>` at INFO.
#[macro_export]
macro_rules! look {
    ($var:expr $(,)?) => { $crate::__lightlog_local_look!($crate::logger(), $var) };
}

/// Traces the rest of the enclosing block as one scope.
///
/// Without a name the scope is named after the enclosing function.
#[macro_export]
macro_rules! trace_scope {
    () => { $crate::__lightlog_local_trace_scope!($crate::logger()) };
    ($name:expr $(,)?) => { $crate::__lightlog_local_trace_scope!($crate::logger(), $name) };
}
