//! Levels, edge events and input descriptions.
//!
//! pinnav represents input as small, source-agnostic records ([`InputKind`]) and
//! timestamps them when they leave the manager ([`InputEvent`]).
//!
//! ## Level conventions
//! - Buttons are wired **active-low** with pull-ups: [`Level::Low`] means the
//!   button is held (asserted), [`Level::High`] means it is released (deasserted).
//! - An [`EdgeEvent`] is only produced on the low→high transition, i.e. on
//!   button *release*. Holding a button never repeats.
//!
//! ## Ids
//! Pin ids and key codes share the same `u16` space inside an input map; the
//! [`InputSource`] tells them apart.

use serde::{Deserialize, Serialize};

/// Identifier of a digital input pin (e.g. a BCM GPIO number).
pub type PinId = u16;

/// Identifier of an injected key.
pub type KeyCode = u16;

/// Instantaneous logic level of a digital pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Active-low: a pin driven low is asserted.
    #[inline]
    pub fn is_asserted(self) -> bool {
        self == Level::Low
    }

    #[inline]
    pub fn from_high(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// One-shot deassertion edge reported by the sampler.
///
/// `value` is always `1` for a deassertion; it is kept as a field so hosts that
/// forward `(pin, value)` pairs to a toolkit do not have to invent it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeEvent {
    pub pin: PinId,
    pub value: i16,
}

impl EdgeEvent {
    pub(crate) fn deasserted(pin: PinId) -> Self {
        Self { pin, value: 1 }
    }
}

/// Category of input used as the first half of an input-map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// A debounced pin edge from the sampler.
    PinEvent,
    /// A key press forwarded by the host.
    KeyDown,
}

/// A single input, before timestamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A monitored pin was released.
    PinDeasserted { pin: PinId, value: i16 },

    /// The host injected a key press.
    KeyDown { key: KeyCode },
}

impl InputKind {
    /// Source kind used for input-map lookup.
    pub fn source(&self) -> InputSource {
        match self {
            InputKind::PinDeasserted { .. } => InputSource::PinEvent,
            InputKind::KeyDown { .. } => InputSource::KeyDown,
        }
    }

    /// Pin id or key code, depending on [`source`](Self::source).
    pub fn id(&self) -> u16 {
        match *self {
            InputKind::PinDeasserted { pin, .. } => pin,
            InputKind::KeyDown { key } => key,
        }
    }
}

impl From<EdgeEvent> for InputKind {
    fn from(ev: EdgeEvent) -> Self {
        InputKind::PinDeasserted {
            pin: ev.pin,
            value: ev.value,
        }
    }
}

/// Timestamped input event produced by the manager.
#[derive(Clone, Debug)]
pub struct InputEvent {
    /// Capture time (monotonic). Suitable for ordering / delta timing within a run.
    pub at: std::time::Instant,
    /// The actual input.
    pub kind: InputKind,
}
