//! Pin metadata.
//!
//! [`PinMeta`] is a lightweight, cloneable description of a monitored pin,
//! suitable for config files, logging and simulation. The order in which pins
//! are listed is also their reporting priority in the sampler.
//!
//! # Conventions
//! - `id` is the platform pin number (BCM numbering on a Raspberry Pi).
//! - `label` is a short, human-readable role such as `"prev"` or `"select"`.
//! - `pull` records how the line is biased. Enabling the resistor is the job of
//!   whoever constructs the HAL pin; pinnav uses it to derive the idle level.
//!
//! # Example
//! ```
//! use pinnav::{Level, PinMeta, Pull};
//!
//! let sel = PinMeta::new(3).with_label("select");
//! assert_eq!(sel.pull, Pull::Up);
//! assert_eq!(sel.idle_level(), Level::High);
//! ```

use crate::event::{Level, PinId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bias resistor configured on an input line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pull {
    #[default]
    Up,
    Down,
    None,
}

/// Description of a single monitored pin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMeta {
    /// Platform pin number.
    pub id: PinId,

    /// Human-readable role, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Bias resistor. Buttons in this crate are active-low, so the default is a pull-up.
    #[serde(default)]
    pub pull: Pull,
}

impl PinMeta {
    pub fn new(id: PinId) -> Self {
        Self {
            id,
            label: None,
            pull: Pull::Up,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }

    /// Level the line rests at when nothing drives it.
    ///
    /// A floating line (`Pull::None`) is assumed to rest high.
    pub fn idle_level(&self) -> Level {
        match self.pull {
            Pull::Up | Pull::None => Level::High,
            Pull::Down => Level::Low,
        }
    }
}

impl fmt::Display for PinMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "GPIO{} ({label})", self.id),
            None => write!(f, "GPIO{}", self.id),
        }
    }
}
