//! TOML configuration for a button panel.
//!
//! ```toml
//! [[pins]]
//! id = 2
//! label = "prev"
//!
//! [[pins]]
//! id = 3
//! label = "select"
//! pull = "up"
//!
//! [debounce]
//! mode = "deadline"   # "deadline" | "blocking" | "none"
//! millis = 5
//!
//! [input_map]
//! name = "nav"
//! capacity = 3
//!
//! [[input_map.bindings]]
//! source = "pin_event"
//! id = 2
//! action = "focus_prev"
//! ```
//!
//! Pins are listed highest priority first; that order is the order in which
//! simultaneous releases are reported.

use crate::binding::{ActionKind, Binding, BindingProfile};
use crate::error::{Error, Result};
use crate::event::{InputSource, PinId};
use crate::metadata::PinMeta;
use crate::sampler::{Debounce, DebounceMode, DEFAULT_DEBOUNCE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// GPIO for "previous element" on the reference panel.
pub const PIN_PREV: PinId = 2;
/// GPIO for "select element" on the reference panel.
pub const PIN_SEL: PinId = 3;
/// GPIO for "next element" on the reference panel.
pub const PIN_NEXT: PinId = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceConfig {
    #[serde(default)]
    pub mode: DebounceMode,
    #[serde(default = "default_debounce_millis")]
    pub millis: u64,
}

fn default_debounce_millis() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            mode: DebounceMode::Deadline,
            millis: default_debounce_millis(),
        }
    }
}

impl DebounceConfig {
    pub fn debounce(&self) -> Debounce {
        Debounce::from_mode(self.mode, Duration::from_millis(self.millis))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub pins: Vec<PinMeta>,
    #[serde(default)]
    pub debounce: DebounceConfig,
    pub input_map: BindingProfile,
}

impl Default for Config {
    /// Three pulled-up buttons on GPIO 2/3/4 driving prev/select/next.
    fn default() -> Self {
        Self {
            pins: vec![
                PinMeta::new(PIN_PREV).with_label("prev"),
                PinMeta::new(PIN_SEL).with_label("select"),
                PinMeta::new(PIN_NEXT).with_label("next"),
            ],
            debounce: DebounceConfig::default(),
            input_map: BindingProfile {
                name: "nav".to_string(),
                description: Some("GPIO focus navigation".to_string()),
                capacity: Some(3),
                bindings: vec![
                    Binding::new(InputSource::PinEvent, PIN_PREV, ActionKind::FocusPrev, 0),
                    Binding::new(InputSource::PinEvent, PIN_SEL, ActionKind::Select, 0),
                    Binding::new(InputSource::PinEvent, PIN_NEXT, ActionKind::FocusNext, 0),
                ],
            },
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pins.is_empty() {
            return Err(Error::NoPins);
        }
        for (i, pin) in self.pins.iter().enumerate() {
            if self.pins[..i].iter().any(|p| p.id == pin.id) {
                return Err(Error::DuplicatePin(pin.id));
            }
        }
        let capacity = self.input_map.capacity();
        let bindings = self.input_map.bindings.len();
        if capacity < bindings {
            return Err(Error::CapacityTooSmall { capacity, bindings });
        }
        Ok(())
    }

    /// Pin ids in priority order.
    pub fn pin_ids(&self) -> Vec<PinId> {
        self.pins.iter().map(|p| p.id).collect()
    }
}
