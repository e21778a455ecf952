use thiserror::Error;

/// An unrecognized severity name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);

/// An unrecognized color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("color mode must be one of `auto`, `always` or `never`")]
pub struct ParseColorModeError;

/// A timestamp pattern `chrono` cannot render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed timestamp pattern `{0}`")]
pub struct TimeFormatError(pub String);

/// Failure to install the process-wide logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// The global logger was already installed, explicitly or by a first log call.
    #[error("the global logger is already initialized")]
    AlreadyInitialized,
}
