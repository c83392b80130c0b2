// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Panel(PanelError),
}

/// Specific error types for host panel (overlay surface) operations.
///
/// The overlay coordinator catches these per-call and reports them as
/// developer diagnostics; they never reach the user.
#[derive(Debug, Clone)]
pub enum PanelError {
    /// The host surface for the panel does not exist.
    Missing,

    /// The host refused to show the panel.
    ShowFailed(String),

    /// The host refused to hide the panel.
    HideFailed(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Missing => write!(f, "panel surface is missing"),
            PanelError::ShowFailed(msg) => write!(f, "panel show failed: {}", msg),
            PanelError::HideFailed(msg) => write!(f, "panel hide failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Panel(e) => write!(f, "Panel Error: {}", e),
        }
    }
}

impl From<PanelError> for Error {
    fn from(err: PanelError) -> Self {
        Error::Panel(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
