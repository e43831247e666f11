//! Per-frame snapshot of pin levels.
//!
//! [`Snapshot`] is an **owned**, read-only view of every monitored pin's level
//! as of the sampler's most recent sampling pass. It is produced by
//! [`PinSampler::snapshot`](crate::sampler::PinSampler::snapshot) and is cheap
//! to clone for fan-out to multiple consumers.
//!
//! # Semantics
//! - Keys are pin ids, iterated in ascending order.
//! - A snapshot is **immutable**. To refresh, poll again and take a new one.
//! - `Snapshot` does **not** read hardware; pins that have never been sampled
//!   are absent.
//!
//! # Example
//! ```no_run
//! use pinnav::Snapshot;
//!
//! fn print_held(snap: &Snapshot) {
//!     for (pin, level) in snap.iter() {
//!         if level.is_asserted() {
//!             println!("GPIO{pin} held");
//!         }
//!     }
//! }
//! ```

use crate::event::{Level, PinId};
use std::collections::BTreeMap;

/// Owned snapshot of current pin levels (`pin id → level`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot(pub BTreeMap<PinId, Level>);

impl Snapshot {
    /// Get the level of a specific pin.
    #[inline]
    pub fn get(&self, pin: PinId) -> Option<Level> {
        self.0.get(&pin).copied()
    }

    /// `true` if the pin was sampled low.
    #[inline]
    pub fn is_asserted(&self, pin: PinId) -> bool {
        self.get(pin).is_some_and(Level::is_asserted)
    }

    /// Iterate `(pin, level)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (PinId, Level)> + '_ {
        self.0.iter().map(|(&pin, &level)| (pin, level))
    }

    /// Consume the snapshot and return the inner map.
    #[inline]
    pub fn into_inner(self) -> BTreeMap<PinId, Level> {
        self.0
    }
}
