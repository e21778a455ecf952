//! Configuration, resolved once before the first record.
//!
//! Every setting is looked up in the process environment first, then in the
//! value the crate was compiled with (`LIGHTLOG_*` set at build time), then
//! falls back to its default.
//! Values that do not parse fall back to the default too; configuration never
//! fails the caller.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};

use crate::error::{ParseColorModeError, TimeFormatError};
use crate::level::{parse_die_level, Level};
use crate::sink::Sink;

/// Environment variable for the active threshold.
pub const ENV_LEVEL: &str = "LIGHTLOG_LEVEL";
/// Environment variable for the terminate threshold (`none`/`off` disables it).
pub const ENV_DIE_LEVEL: &str = "LIGHTLOG_DIE_LEVEL";
/// Environment variable for the color mode.
pub const ENV_COLOR: &str = "LIGHTLOG_COLOR";
/// Environment variable for the strftime timestamp pattern.
pub const ENV_TIME_FORMAT: &str = "LIGHTLOG_TIME_FORMAT";

/// Default active threshold.
pub const DEFAULT_LEVEL: Level = Level::Info;
/// Default terminate threshold.
pub const DEFAULT_DIE_LEVEL: Option<Level> = Some(Level::Fatal);
/// Default timestamp pattern, `14:55:02`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Color mode
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ColorMode {
    /// Color when the target is a terminal
    #[default]
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if s.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            Err(ParseColorModeError)
        }
    }
}

impl TryFrom<&str> for ColorMode {
    type Error = ParseColorModeError;
    fn try_from(s: &str) -> Result<Self, ParseColorModeError> {
        s.parse()
    }
}

/// A validated strftime pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimeFormat(Cow<'static, str>);

impl TimeFormat {
    /// Validates `pattern` against chrono's strftime grammar.
    /// # Errors
    /// Returns [`TimeFormatError`] if any specifier is unknown or truncated.
    pub fn parse(pattern: &str) -> Result<Self, TimeFormatError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TimeFormatError(pattern.to_owned()));
        }
        Ok(Self(Cow::Owned(pattern.to_owned())))
    }

    /// Like [`TimeFormat::parse`], but a malformed pattern yields the default.
    #[must_use]
    pub fn parse_or_default(pattern: &str) -> Self {
        Self::parse(pattern).unwrap_or_default()
    }

    /// The pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self(Cow::Borrowed(DEFAULT_TIME_FORMAT))
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logger configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Records more verbose than this are dropped.
    pub level: Level,
    /// Records at least this severe end the process after flushing; `None` never does.
    pub die_level: Option<Level>,
    /// Whether level tags are wrapped in ANSI escapes.
    pub color: ColorMode,
    /// Timestamp pattern.
    pub time_format: TimeFormat,
    /// Where records go.
    pub sink: Sink,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            die_level: DEFAULT_DIE_LEVEL,
            color: ColorMode::Auto,
            time_format: TimeFormat::default(),
            sink: Sink::stderr(),
        }
    }
}

impl Config {
    /// Create a new `ConfigBuilder`
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolves every setting from the environment, then the build, then defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok(), baked)
    }

    /// Resolves every setting through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self::resolve(lookup, |_| None)
    }

    // A value that does not parse gives way to the fallback, then the default.
    fn resolve(
        mut lookup: impl FnMut(&str) -> Option<String>,
        fallback: impl Fn(&str) -> Option<&'static str>,
    ) -> Self {
        let mut pick = |key: &str| (lookup(key), fallback(key));
        let (s, b) = pick(ENV_LEVEL);
        let level = first_valid(s, b, |v| v.parse().ok());
        let (s, b) = pick(ENV_DIE_LEVEL);
        let die_level = first_valid(s, b, |v| parse_die_level(v).ok());
        let (s, b) = pick(ENV_COLOR);
        let color = first_valid(s, b, |v| v.parse().ok());
        let (s, b) = pick(ENV_TIME_FORMAT);
        let time_format = first_valid(s, b, |v| TimeFormat::parse(v).ok());
        Self {
            level: level.unwrap_or(DEFAULT_LEVEL),
            die_level: die_level.unwrap_or(DEFAULT_DIE_LEVEL),
            color: color.unwrap_or_default(),
            time_format: time_format.unwrap_or_default(),
            sink: Sink::stderr(),
        }
    }

    /// Whether this configuration renders colored tags on its sink.
    #[must_use]
    pub fn use_color(&self) -> bool {
        if !cfg!(feature = "color") {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => self.sink.is_terminal(),
        }
    }
}

fn first_valid<T>(
    value: Option<String>,
    fallback: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    value
        .as_deref()
        .and_then(&parse)
        .or_else(|| fallback.and_then(&parse))
}

/// Values fixed when the crate was compiled.
fn baked(key: &str) -> Option<&'static str> {
    match key {
        ENV_LEVEL => option_env!("LIGHTLOG_LEVEL"),
        ENV_DIE_LEVEL => option_env!("LIGHTLOG_DIE_LEVEL"),
        ENV_COLOR => option_env!("LIGHTLOG_COLOR"),
        ENV_TIME_FORMAT => option_env!("LIGHTLOG_TIME_FORMAT"),
        _ => None,
    }
}

/// Builder for `Config`
#[derive(Default)]
pub struct ConfigBuilder {
    cfg: Config,
}

impl ConfigBuilder {
    /// Starts from environment-resolved values instead of the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cfg: Config::from_env(),
        }
    }

    #[inline]
    #[must_use]
    /// Set the active threshold
    pub const fn level(mut self, l: Level) -> Self {
        self.cfg.level = l;
        self
    }
    #[inline]
    #[must_use]
    /// Set the terminate threshold
    pub const fn die_level(mut self, l: Option<Level>) -> Self {
        self.cfg.die_level = l;
        self
    }
    #[inline]
    #[must_use]
    /// Set the color mode
    pub const fn color(mut self, m: ColorMode) -> Self {
        self.cfg.color = m;
        self
    }
    #[inline]
    #[must_use]
    /// Set the timestamp pattern
    pub fn time_format(mut self, f: TimeFormat) -> Self {
        self.cfg.time_format = f;
        self
    }
    #[inline]
    #[must_use]
    /// Set the output target to stdout
    pub fn stdout(mut self) -> Self {
        self.cfg.sink = Sink::stdout();
        self
    }
    #[inline]
    #[must_use]
    /// Set the output target to stderr
    pub fn stderr(mut self) -> Self {
        self.cfg.sink = Sink::stderr();
        self
    }
    #[inline]
    #[must_use]
    /// Set the output target to a custom writer
    pub fn writer(mut self, w: Box<dyn Write + Send>) -> Self {
        self.cfg.sink = Sink::writer(w);
        self
    }
    /// Set the output target to a file
    /// # Errors
    /// This function will return an error if the file cannot be opened for writing
    pub fn file(mut self, p: impl AsRef<Path>) -> io::Result<Self> {
        self.cfg.sink = Sink::file(p)?;
        Ok(self)
    }

    /// Finish the configuration
    #[must_use]
    pub fn build(self) -> Config {
        self.cfg
    }
}
