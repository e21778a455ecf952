//! The diagnostic stream records are written to.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// Output target
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Target {
    /// stdout
    Stdout,
    /// stderr
    #[default]
    Stderr,
    /// custom writer
    Writer,
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// One process-wide lock so lines from every logger land whole.
static EMIT_LOCK: Mutex<()> = Mutex::new(());

/// A target plus, for [`Target::Writer`], the writer itself.
#[derive(Clone, Default)]
pub struct Sink {
    target: Target,
    writer: Option<SharedWriter>,
}

impl Sink {
    /// Standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::default()
    }

    /// Standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
            writer: None,
        }
    }

    /// A custom writer.
    #[must_use]
    pub fn writer(w: Box<dyn Write + Send>) -> Self {
        Self {
            target: Target::Writer,
            writer: Some(Arc::new(Mutex::new(w))),
        }
    }

    /// A file opened for appending, created if missing.
    /// # Errors
    /// This function will return an error if the file cannot be opened for writing.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self::writer(Box::new(f)))
    }

    /// Which stream this sink writes to.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    pub(crate) fn is_terminal(&self) -> bool {
        match self.target {
            Target::Stdout => io::stdout().is_terminal(),
            Target::Stderr => io::stderr().is_terminal(),
            // unknown sink => assume no TTY
            Target::Writer => false,
        }
    }

    /// Writes one complete line and flushes it before returning.
    pub(crate) fn write_line(&self, bytes: &[u8]) -> io::Result<()> {
        let _g = EMIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        match self.target {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Target::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(bytes)?;
                err.flush()
            }
            Target::Writer => match &self.writer {
                Some(m) => {
                    let mut w = m.lock().unwrap_or_else(PoisonError::into_inner);
                    w.write_all(bytes)?;
                    w.flush()
                }
                None => Ok(()),
            },
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("target", &self.target).finish()
    }
}
