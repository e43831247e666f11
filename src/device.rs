use crate::event::{Level, PinId};

/// Source of raw digital pin levels.
///
/// Reads are treated as infallible: a backend that can fail decides on a
/// fallback level itself (see [`HalPinBank`](crate::backends::hal::HalPinBank)).
pub trait PinReader {
    fn read_level(&mut self, pin: PinId) -> Level;

    fn id(&self) -> &str {
        "pins"
    }
}

impl<F> PinReader for F
where
    F: FnMut(PinId) -> Level,
{
    fn read_level(&mut self, pin: PinId) -> Level {
        self(pin)
    }
}
