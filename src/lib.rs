//! pinnav: GPIO button input for page/widget UIs.
//!
//! Samples a handful of active-low push buttons, turns releases into debounced
//! one-shot edge events, and maps them through a small input map to UI actions
//! such as "focus next" or "select".
//!
//! ```no_run
//! use pinnav::{Config, InputManager, Page, VirtualPins};
//!
//! let config = Config::default();
//! let pins = VirtualPins::from_meta("panel", &config.pins);
//! let mut input = InputManager::from_config(pins, &config).expect("valid config");
//! let mut page = Page::new();
//!
//! loop {
//!     if let Some(action) = input.poll_action().and_then(|d| d.action) {
//!         page.apply(action);
//!     }
//! }
//! ```

pub mod backends;
pub mod binding;
pub mod clock;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod logger;
pub mod manager;
pub mod metadata;
pub mod page;
pub mod sampler;
pub mod snapshot;

#[cfg(feature = "hal")]
pub use backends::hal::HalPinBank;
pub use backends::virtual_input::VirtualPins;
pub use binding::*;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::Config;
pub use device::*;
pub use error::{Error, Result};
pub use event::*;
pub use eventbus::*;
pub use filtered_listener::FilteredListener;
pub use logger::EventLogger;
pub use manager::*;
pub use metadata::*;
pub use page::*;
pub use sampler::*;
pub use snapshot::Snapshot;
