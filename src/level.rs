//! Severities and the threshold checks built on them.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseLevelError;

/// Log levels, most severe first.
///
/// The derived ordering follows verbosity: `Fatal < Error < ... < Verbose`.
/// A level is enabled when it is not more verbose than the active threshold.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Level {
    /// Unrecoverable; terminates the process under the default policy
    Fatal = 0,
    /// Error
    Error,
    /// Warning
    Warning,
    /// Info
    Info,
    /// Debug, also used by scope enter/exit records
    Debug,
    /// Verbose
    Verbose,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Verbose,
    ];

    /// Returns `true` if `self` is at least as severe as `active`.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self, active: Self) -> bool {
        (self as u8) <= (active as u8)
    }

    /// Returns `true` if a record at `self` must end the process.
    #[inline]
    #[must_use]
    pub const fn should_terminate(self, die: Option<Self>) -> bool {
        match die {
            Some(d) => (self as u8) <= (d as u8),
            None => false,
        }
    }

    /// Fixed-width tag written into the preamble.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARN ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERB ",
        }
    }

    /// Upper-case level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let level = if s.eq_ignore_ascii_case("fatal") {
            Self::Fatal
        } else if s.eq_ignore_ascii_case("error") {
            Self::Error
        } else if s.eq_ignore_ascii_case("warning") || s.eq_ignore_ascii_case("warn") {
            Self::Warning
        } else if s.eq_ignore_ascii_case("info") {
            Self::Info
        } else if s.eq_ignore_ascii_case("debug") {
            Self::Debug
        } else if s.eq_ignore_ascii_case("verbose") || s.eq_ignore_ascii_case("trace") {
            Self::Verbose
        } else {
            return Err(ParseLevelError(s.to_owned()));
        };
        Ok(level)
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseLevelError;
    fn try_from(s: &str) -> Result<Self, ParseLevelError> {
        s.parse()
    }
}

/// Parses a terminate threshold, where `none`/`off` disables termination.
///
/// # Errors
/// Returns [`ParseLevelError`] for anything that is neither a level nor an off switch.
pub fn parse_die_level(s: &str) -> Result<Option<Level>, ParseLevelError> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("none") || t.eq_ignore_ascii_case("off") {
        Ok(None)
    } else {
        t.parse().map(Some)
    }
}

// ===== Compile-time ceiling =====
// Every level survives unless the `max-level-debug` feature compiles VERBOSE
// call sites out. Loggers clamp their threshold to this, so `level()` never
// promises lines that cannot be written.
/// Most verbose level call sites are compiled for.
#[cfg(not(feature = "max-level-debug"))]
pub const STATIC_MAX_LEVEL: Level = Level::Verbose;
/// Most verbose level call sites are compiled for.
#[cfg(feature = "max-level-debug")]
pub const STATIC_MAX_LEVEL: Level = Level::Debug;

/// Returns `true` if call sites at `l` survive compilation.
#[inline]
#[must_use]
pub const fn ct_enabled(l: Level) -> bool {
    l.is_enabled(STATIC_MAX_LEVEL)
}

/// Free-function form of [`Level::is_enabled`].
#[inline]
#[must_use]
pub const fn is_enabled(requested: Level, active: Level) -> bool {
    requested.is_enabled(active)
}

/// Free-function form of [`Level::should_terminate`].
#[inline]
#[must_use]
pub const fn should_terminate(requested: Level, die: Option<Level>) -> bool {
    requested.should_terminate(die)
}
