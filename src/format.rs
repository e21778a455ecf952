//! Record preambles: `[<time>][<TAG>]:<file>:<line>: <indent>`.

use core::fmt::Write as _;

use chrono::{DateTime, TimeZone};

use crate::config::TimeFormat;
use crate::level::Level;

/// Column width of the file name, ellipsis included.
pub const FILE_WIDTH: usize = 9;
/// Column width of the right-aligned line number.
pub const LINE_WIDTH: usize = 3;
/// Spaces per unit of scope depth.
pub const INDENT_WIDTH: usize = 2;

const ELLIPSIS: &str = "...";

#[cfg(feature = "color")]
pub(crate) mod color {
    pub const RST: &str = "\x1b[0m";
    pub const FATAL: &str = "\x1b[1;41;37m"; // bold white on red
    pub const ERROR: &str = "\x1b[1;31m"; // bold red
    pub const WARNING: &str = "\x1b[1;33m"; // bold yellow
    pub const INFO: &str = "\x1b[35m"; // magenta
    pub const DEBUG: &str = "\x1b[36m"; // cyan
    pub const VERBOSE: &str = "\x1b[90m"; // bright black
}

/// Returns the escape sequence opening a level tag.
#[cfg(feature = "color")]
#[inline]
#[must_use]
pub const fn level_color(l: Level) -> &'static str {
    match l {
        Level::Fatal => color::FATAL,
        Level::Error => color::ERROR,
        Level::Warning => color::WARNING,
        Level::Info => color::INFO,
        Level::Debug => color::DEBUG,
        Level::Verbose => color::VERBOSE,
    }
}

/// Where a record was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    /// Source path as given by `file!()`.
    pub file: &'static str,
    /// Enclosing function path, when known.
    pub function: Option<&'static str>,
    /// Line number.
    pub line: u32,
}

impl Origin {
    /// Origin without a function name.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            file,
            function: None,
            line,
        }
    }

    /// Attaches the enclosing function path.
    #[must_use]
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Last component of [`Origin::file`].
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

/// Strips the helper suffixes `function_name!` leaves on a type name.
#[doc(hidden)]
#[must_use]
pub fn function_path(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Renders the preamble of one record.
///
/// Pure: the same inputs always produce the same bytes. A negative
/// `indent_depth` renders as no indentation.
#[must_use]
pub fn format_preamble(
    level: Level,
    origin: &Origin,
    indent_depth: isize,
    timestamp: &str,
    use_color: bool,
) -> String {
    let mut buf = String::with_capacity(48);
    write_preamble(&mut buf, level, origin, indent_depth, timestamp, use_color);
    buf
}

pub(crate) fn write_preamble(
    buf: &mut String,
    level: Level,
    origin: &Origin,
    indent_depth: isize,
    timestamp: &str,
    use_color: bool,
) {
    buf.push('[');
    buf.push_str(timestamp);
    buf.push_str("][");
    write_level(buf, level, use_color);
    buf.push_str("]:");
    write_file_column(buf, origin.file_name());
    let _ = write!(buf, ":{:>width$}: ", origin.line, width = LINE_WIDTH);
    let depth = usize::try_from(indent_depth).unwrap_or(0);
    buf.extend(core::iter::repeat(' ').take(depth * INDENT_WIDTH));
}

#[inline]
fn write_level(buf: &mut String, l: Level, use_color: bool) {
    #[cfg(feature = "color")]
    if use_color {
        buf.push_str(level_color(l));
        buf.push_str(l.tag());
        buf.push_str(color::RST);
        return;
    }
    let _ = use_color;
    buf.push_str(l.tag());
}

fn write_file_column(buf: &mut String, name: &str) {
    let len = name.chars().count();
    if len > FILE_WIDTH {
        buf.extend(name.chars().take(FILE_WIDTH - ELLIPSIS.len()));
        buf.push_str(ELLIPSIS);
    } else {
        buf.push_str(name);
        buf.extend(core::iter::repeat(' ').take(FILE_WIDTH - len));
    }
}

/// Renders preambles for one logger: its timestamp pattern and color choice.
#[derive(Clone, Debug)]
pub struct Formatter {
    time_format: TimeFormat,
    use_color: bool,
}

impl Formatter {
    /// A formatter with an already-resolved color decision.
    #[must_use]
    pub const fn new(time_format: TimeFormat, use_color: bool) -> Self {
        Self {
            time_format,
            use_color,
        }
    }

    /// Whether tags are colored.
    #[must_use]
    pub const fn use_color(&self) -> bool {
        self.use_color
    }

    /// Renders `at` with the configured pattern.
    pub fn timestamp<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        let mut out = String::new();
        let _ = write!(out, "{}", at.format(self.time_format.as_str()));
        out
    }

    /// Writes the full preamble for a record stamped `at`.
    pub fn write<Tz>(
        &self,
        buf: &mut String,
        level: Level,
        origin: &Origin,
        indent_depth: isize,
        at: &DateTime<Tz>,
    ) where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        let ts = self.timestamp(at);
        write_preamble(buf, level, origin, indent_depth, &ts, self.use_color);
    }

    /// Returns the full preamble for a record stamped `at`.
    pub fn preamble<Tz>(
        &self,
        level: Level,
        origin: &Origin,
        indent_depth: isize,
        at: &DateTime<Tz>,
    ) -> String
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        let mut buf = String::with_capacity(48);
        self.write(&mut buf, level, origin, indent_depth, at);
        buf
    }
}
