//! Crate error type.
//!
//! Setup-time misconfiguration (a full input map, duplicate pins, a bad config
//! file) is reported through [`Error`]. Polling never fails: "no event" is a
//! normal outcome, and hardware read errors are absorbed by the backends.

use crate::event::PinId;
use thiserror::Error;

/// Errors produced while configuring pins, input maps and pages.
#[derive(Debug, Error)]
pub enum Error {
    /// Registering another binding would exceed the map's fixed capacity.
    #[error("input map is full (capacity {capacity})")]
    MapFull { capacity: usize },

    /// A binding profile declares fewer slots than it has bindings.
    #[error("input map capacity {capacity} is smaller than its {bindings} binding(s)")]
    CapacityTooSmall { capacity: usize, bindings: usize },

    /// A sampler or config was given no pins to monitor.
    #[error("no pins configured")]
    NoPins,

    /// The same pin id was listed twice.
    #[error("pin {0} is listed more than once")]
    DuplicatePin(PinId),

    /// A page already holds a widget with this id.
    #[error("widget id {0} is already in use on this page")]
    DuplicateWidget(u16),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid binding profile: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
