use crate::device::PinReader;
use crate::event::{Level, PinId};
use crate::metadata::PinMeta;
use std::collections::BTreeMap;

/// In-memory pin bank for tests, simulators and demos.
///
/// Unknown pins read as [`Level::High`], i.e. an idle pulled-up button.
#[derive(Clone, Debug, Default)]
pub struct VirtualPins {
    id: String,
    levels: BTreeMap<PinId, Level>,
}

impl VirtualPins {
    /// All listed pins start high (released).
    pub fn new(id: &str, pins: &[PinId]) -> Self {
        Self {
            id: id.to_string(),
            levels: pins.iter().map(|&p| (p, Level::High)).collect(),
        }
    }

    /// Each pin starts at the idle level implied by its pull resistor.
    pub fn from_meta(id: &str, pins: &[PinMeta]) -> Self {
        Self {
            id: id.to_string(),
            levels: pins.iter().map(|m| (m.id, m.idle_level())).collect(),
        }
    }

    /// Drive a pin to a specific level.
    pub fn set_level(&mut self, pin: PinId, level: Level) {
        self.levels.insert(pin, level);
    }

    /// Hold a button down (drive it low).
    pub fn press(&mut self, pin: PinId) {
        self.set_level(pin, Level::Low);
    }

    /// Let a button go (back to high).
    pub fn release(&mut self, pin: PinId) {
        self.set_level(pin, Level::High);
    }

    pub fn level(&self, pin: PinId) -> Level {
        self.levels.get(&pin).copied().unwrap_or(Level::High)
    }
}

impl PinReader for VirtualPins {
    fn read_level(&mut self, pin: PinId) -> Level {
        self.level(pin)
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Pull;

    #[test]
    fn idle_levels_follow_pull() {
        let pins = VirtualPins::from_meta(
            "v",
            &[PinMeta::new(2), PinMeta::new(5).with_pull(Pull::Down)],
        );
        assert_eq!(pins.level(2), Level::High);
        assert_eq!(pins.level(5), Level::Low);
        assert_eq!(pins.level(9), Level::High);
    }

    #[test]
    fn press_and_release() {
        let mut pins = VirtualPins::new("v", &[3]);
        pins.press(3);
        assert_eq!(pins.read_level(3), Level::Low);
        pins.release(3);
        assert_eq!(pins.read_level(3), Level::High);
        assert_eq!(PinReader::id(&pins), "v");
    }
}
