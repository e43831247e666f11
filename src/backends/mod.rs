//! Pin backends for `pinnav`.
//!
//! Implementations of [`PinReader`](crate::device::PinReader) for concrete
//! pin sources.
//!
//! # Feature flags
//! - **`hal`** (default): [`hal::HalPinBank`] over `embedded-hal` 1.0 input pins.
//!
//! [`virtual_input::VirtualPins`] is always available; it backs the tests and
//! the demo, and is handy for desktop simulation of a button panel.

#[cfg(feature = "hal")]
#[cfg_attr(docsrs, doc(cfg(feature = "hal")))]
pub mod hal;

pub mod virtual_input;
