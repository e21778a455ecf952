//! Call-scope tracking.
//!
//! Each thread keeps its own depth counter, so indentation always reflects the
//! call depth of the thread that writes the record. The counter is only moved
//! by [`ScopeGuard`].

use std::borrow::Cow;
use std::cell::Cell;
use std::marker::PhantomData;

use crate::format::Origin;
use crate::level::Level;
use crate::local::Logger;

/// Severity of the enter/exit records.
pub const SCOPE_LEVEL: Level = Level::Debug;

thread_local! {
    static DEPTH: Cell<isize> = const { Cell::new(0) };
}

#[inline]
pub(crate) fn raw_depth() -> isize {
    DEPTH.with(Cell::get)
}

/// Number of live scope guards on the current thread.
#[inline]
#[must_use]
pub fn indent_depth() -> usize {
    usize::try_from(raw_depth()).unwrap_or(0)
}

fn shift(delta: isize) {
    DEPTH.with(|d| d.set(d.get() + delta));
}

/// Marks one traced call: indents on creation, unindents on drop.
///
/// Dropping happens on every way out of the enclosing block, including early
/// returns and panics, so guards always close innermost first. The guard is
/// neither `Send` nor `Sync`: it must be dropped on the thread whose depth it
/// raised.
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct ScopeGuard<'a> {
    logger: &'a Logger,
    name: Cow<'static, str>,
    origin: Origin,
    _not_send: PhantomData<*const ()>,
}

impl<'a> ScopeGuard<'a> {
    /// Opens a scope named `name` and emits its enter record.
    pub fn enter(logger: &'a Logger, name: impl Into<Cow<'static, str>>, origin: Origin) -> Self {
        let guard = Self {
            logger,
            name: name.into(),
            origin,
            _not_send: PhantomData,
        };
        shift(1);
        guard
            .logger
            .emit(SCOPE_LEVEL, guard.origin, format_args!("--> {}", guard.name));
        guard
    }

    /// The traced scope's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.logger
            .emit(SCOPE_LEVEL, self.origin, format_args!("<-- {}", self.name));
        shift(-1);
    }
}
