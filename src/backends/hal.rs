//! `embedded-hal` 1.0 backend.
//!
//! [`HalPinBank`] wraps any set of [`InputPin`]s (linux-embedded-hal, rppal,
//! esp-hal, ...) and exposes them as a [`PinReader`].
//!
//! The bank does **not** configure the pins: pull-ups must already be enabled
//! by whoever constructed them. Reads through `embedded-hal` can fail; the bank
//! logs the error and falls back to the pin's last good level so the sampler
//! sees no spurious edge.

use crate::device::PinReader;
use crate::error::{Error, Result};
use crate::event::{Level, PinId};
use embedded_hal::digital::InputPin;
use log::warn;

struct BankPin<P> {
    id: PinId,
    pin: P,
    last: Level,
}

/// A set of `embedded-hal` input pins addressed by [`PinId`].
pub struct HalPinBank<P> {
    id: String,
    pins: Vec<BankPin<P>>,
}

impl<P: InputPin> HalPinBank<P> {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            pins: Vec::new(),
        }
    }

    /// Add a pin under the given id.
    pub fn add_pin(&mut self, id: PinId, pin: P) -> Result<()> {
        if self.pins.iter().any(|p| p.id == id) {
            return Err(Error::DuplicatePin(id));
        }
        self.pins.push(BankPin {
            id,
            pin,
            last: Level::High,
        });
        Ok(())
    }

    pub fn with_pin(mut self, id: PinId, pin: P) -> Result<Self> {
        self.add_pin(id, pin)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl<P: InputPin> PinReader for HalPinBank<P> {
    fn read_level(&mut self, pin: PinId) -> Level {
        let Some(entry) = self.pins.iter_mut().find(|p| p.id == pin) else {
            warn!("{}: GPIO{pin} is not part of this bank", self.id);
            return Level::High;
        };

        match entry.pin.is_high() {
            Ok(high) => {
                entry.last = Level::from_high(high);
                entry.last
            }
            Err(e) => {
                warn!("{}: failed to read GPIO{pin}: {e:?}", self.id);
                entry.last
            }
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
