//! Debounced release detection for a fixed set of pins.
//!
//! [`PinSampler`] owns a [`PinReader`] and a small state record per monitored
//! pin. Every call to [`poll`](PinSampler::poll):
//!
//! 1. samples all pins (unless a debounce window is still open),
//! 2. latches a pending event for each pin that went **low → high**,
//! 3. reports at most **one** pending event, in the pins' priority order.
//!
//! Callers drain simultaneous releases by polling repeatedly; each latched
//! event is reported exactly once.
//!
//! ## Debounce
//! After a sampling pass that saw a release, contact bounce is suppressed
//! according to [`Debounce`]:
//! - [`Debounce::Deadline`] (default, 5 ms): pins are not sampled again until the
//!   clock passes the deadline. Latched events keep draining meanwhile and the
//!   caller never blocks.
//! - [`Debounce::Blocking`]: the calling thread sleeps for the duration right
//!   after the pass. Simple, but stalls the whole UI loop.
//! - [`Debounce::None`]: every poll samples.
//!
//! ## Startup
//! The first sample of a pin only establishes its baseline. A button that idles
//! high never produces a spurious release on the first poll.
//!
//! # Example
//! ```
//! use pinnav::{Level, PinSampler, VirtualPins};
//!
//! let pins = VirtualPins::new("demo", &[2, 3, 4]);
//! let mut sampler = PinSampler::new(pins, &[2, 3, 4]).unwrap();
//! assert_eq!(sampler.poll(), None);
//!
//! sampler.reader_mut().set_level(3, Level::Low);
//! assert_eq!(sampler.poll(), None);
//! sampler.reader_mut().set_level(3, Level::High);
//! assert_eq!(sampler.poll().map(|ev| ev.pin), Some(3));
//! ```

use crate::clock::{Clock, MonotonicClock};
use crate::device::PinReader;
use crate::error::{Error, Result};
use crate::event::{EdgeEvent, Level, PinId};
use crate::snapshot::Snapshot;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Quiet period applied after a release, matching the usual 5 ms button debounce.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(5);

/// How contact bounce is suppressed after a detected release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Debounce {
    /// No suppression.
    None,
    /// Skip sampling until `now + d`.
    Deadline(Duration),
    /// Sleep the caller for `d`.
    Blocking(Duration),
}

impl Default for Debounce {
    fn default() -> Self {
        Debounce::Deadline(DEFAULT_DEBOUNCE)
    }
}

/// Serializable debounce mode, paired with a duration in config files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebounceMode {
    None,
    #[default]
    Deadline,
    Blocking,
}

impl Debounce {
    pub fn from_mode(mode: DebounceMode, duration: Duration) -> Self {
        match mode {
            DebounceMode::None => Debounce::None,
            DebounceMode::Deadline => Debounce::Deadline(duration),
            DebounceMode::Blocking => Debounce::Blocking(duration),
        }
    }
}

/// Sampled state of one pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinState {
    pub id: PinId,
    /// Level seen on the latest sampling pass.
    pub current: Level,
    /// Level seen on the pass before that.
    pub previous: Level,
    /// A release was detected and has not been reported yet.
    pub pending: bool,
    primed: bool,
}

impl PinState {
    fn new(id: PinId) -> Self {
        Self {
            id,
            current: Level::High,
            previous: Level::High,
            pending: false,
            primed: false,
        }
    }

    /// Shift in a new level. Returns `true` on a low→high transition.
    fn sample(&mut self, level: Level) -> bool {
        if !self.primed {
            self.primed = true;
            self.current = level;
            self.previous = level;
            return false;
        }

        self.previous = self.current;
        self.current = level;

        match (self.previous, self.current) {
            (Level::High, Level::Low) => {
                trace!("GPIO{} asserted", self.id);
                false
            }
            (Level::Low, Level::High) => {
                debug!("GPIO{} deasserted", self.id);
                self.pending = true;
                true
            }
            _ => false,
        }
    }
}

/// Edge detector over a fixed, priority-ordered set of pins.
pub struct PinSampler<R, C = MonotonicClock> {
    reader: R,
    clock: C,
    pins: Vec<PinState>,
    debounce: Debounce,
    quiet_until: Option<Instant>,
}

impl<R: PinReader> PinSampler<R> {
    /// Monitor `pins` (highest priority first) using the monotonic clock.
    pub fn new(reader: R, pins: &[PinId]) -> Result<Self> {
        Self::with_clock(reader, pins, MonotonicClock)
    }
}

impl<R: PinReader, C: Clock> PinSampler<R, C> {
    pub fn with_clock(reader: R, pins: &[PinId], clock: C) -> Result<Self> {
        if pins.is_empty() {
            return Err(Error::NoPins);
        }
        let mut states: Vec<PinState> = Vec::with_capacity(pins.len());
        for &id in pins {
            if states.iter().any(|s| s.id == id) {
                return Err(Error::DuplicatePin(id));
            }
            states.push(PinState::new(id));
        }

        Ok(Self {
            reader,
            clock,
            pins: states,
            debounce: Debounce::default(),
            quiet_until: None,
        })
    }

    pub fn with_debounce(mut self, debounce: Debounce) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn debounce(&self) -> Debounce {
        self.debounce
    }

    /// Sample (if allowed) and report the highest-priority pending release.
    pub fn poll(&mut self) -> Option<EdgeEvent> {
        let now = self.clock.now();
        let quiet = matches!(self.quiet_until, Some(until) if now < until);

        if !quiet {
            self.quiet_until = None;
            if self.sample_all() {
                match self.debounce {
                    Debounce::None => {}
                    Debounce::Deadline(d) => self.quiet_until = Some(now + d),
                    Debounce::Blocking(d) => std::thread::sleep(d),
                }
            }
        }

        let state = self.pins.iter_mut().find(|s| s.pending)?;
        state.pending = false;
        Some(EdgeEvent::deasserted(state.id))
    }

    fn sample_all(&mut self) -> bool {
        let mut released = false;
        for state in self.pins.iter_mut() {
            let level = self.reader.read_level(state.id);
            #[cfg(feature = "debug-log")]
            trace!("{}: GPIO{} = {:?}", self.reader.id(), state.id, level);
            released |= state.sample(level);
        }
        released
    }

    /// Number of latched releases not yet reported.
    pub fn pending(&self) -> usize {
        self.pins.iter().filter(|s| s.pending).count()
    }

    /// `true` while a deadline debounce window suppresses sampling.
    pub fn is_quiet(&self) -> bool {
        matches!(self.quiet_until, Some(until) if self.clock.now() < until)
    }

    /// Per-pin state in priority order.
    pub fn pins(&self) -> &[PinState] {
        &self.pins
    }

    /// Levels from the latest sampling pass. Pins never sampled are omitted.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(
            self.pins
                .iter()
                .filter(|s| s.primed)
                .map(|s| (s.id, s.current))
                .collect(),
        )
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualPins;
    use crate::clock::ManualClock;

    fn sampler(pins: &[PinId]) -> (PinSampler<VirtualPins, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let s = PinSampler::with_clock(VirtualPins::new("test", pins), pins, clock.clone())
            .unwrap();
        (s, clock)
    }

    #[test]
    fn rejects_empty_and_duplicate_pins() {
        let none = PinSampler::new(VirtualPins::new("t", &[]), &[]);
        assert!(matches!(none, Err(Error::NoPins)));

        let dup = PinSampler::new(VirtualPins::new("t", &[2]), &[2, 3, 2]);
        assert!(matches!(dup, Err(Error::DuplicatePin(2))));
    }

    #[test]
    fn first_sample_is_baseline() {
        let (mut s, _) = sampler(&[2]);
        s.reader_mut().set_level(2, Level::Low);
        assert_eq!(s.poll(), None);
        assert_eq!(s.pins()[0].previous, Level::Low);
        assert_eq!(s.pins()[0].current, Level::Low);
    }

    #[test]
    fn idle_high_pins_never_fire() {
        let (mut s, _) = sampler(&[2, 3, 4]);
        for _ in 0..50 {
            assert_eq!(s.poll(), None);
        }
    }

    #[test]
    fn held_low_never_fires() {
        let (mut s, _) = sampler(&[3]);
        s.poll();
        s.reader_mut().set_level(3, Level::Low);
        for _ in 0..20 {
            assert_eq!(s.poll(), None);
        }
        assert!(s.snapshot().is_asserted(3));
    }

    #[test]
    fn release_fires_once() {
        let (mut s, clock) = sampler(&[3]);
        s.poll();
        s.reader_mut().set_level(3, Level::Low);
        s.poll();
        s.reader_mut().set_level(3, Level::High);

        assert_eq!(s.poll(), Some(EdgeEvent { pin: 3, value: 1 }));
        assert_eq!(s.poll(), None);
        clock.advance(Duration::from_millis(50));
        assert_eq!(s.poll(), None);
    }

    #[test]
    fn simultaneous_releases_drain_in_priority_order() {
        let (mut s, _) = sampler(&[2, 3, 4]);
        s.poll();
        s.reader_mut().set_level(4, Level::Low);
        s.reader_mut().set_level(2, Level::Low);
        s.poll();
        s.reader_mut().set_level(4, Level::High);
        s.reader_mut().set_level(2, Level::High);

        assert_eq!(s.poll().map(|e| e.pin), Some(2));
        assert_eq!(s.pending(), 1);
        assert_eq!(s.poll().map(|e| e.pin), Some(4));
        assert_eq!(s.poll(), None);
    }

    #[test]
    fn deadline_window_skips_bounce() {
        let (mut s, clock) = sampler(&[3]);
        s.poll();
        s.reader_mut().set_level(3, Level::Low);
        s.poll();
        s.reader_mut().set_level(3, Level::High);
        assert!(s.poll().is_some());
        assert!(s.is_quiet());

        // Bounce inside the window is not sampled.
        s.reader_mut().set_level(3, Level::Low);
        clock.advance(Duration::from_millis(2));
        assert_eq!(s.poll(), None);
        s.reader_mut().set_level(3, Level::High);
        clock.advance(Duration::from_millis(2));
        assert_eq!(s.poll(), None);
        assert_eq!(s.pins()[0].current, Level::High);

        clock.advance(Duration::from_millis(2));
        assert!(!s.is_quiet());
        assert_eq!(s.poll(), None);
    }

    #[test]
    fn without_debounce_every_poll_samples() {
        let (s, _) = sampler(&[3]);
        let mut s = s.with_debounce(Debounce::None);
        s.poll();
        for _ in 0..3 {
            s.reader_mut().set_level(3, Level::Low);
            assert_eq!(s.poll(), None);
            s.reader_mut().set_level(3, Level::High);
            assert_eq!(s.poll().map(|e| e.pin), Some(3));
        }
    }

    #[test]
    fn blocking_debounce_sleeps_after_release() {
        let (s, _) = sampler(&[3]);
        let mut s = s.with_debounce(Debounce::Blocking(Duration::from_millis(1)));
        s.poll();
        s.reader_mut().set_level(3, Level::Low);
        s.poll();
        s.reader_mut().set_level(3, Level::High);

        let start = Instant::now();
        assert_eq!(s.poll().map(|e| e.pin), Some(3));
        assert!(start.elapsed() >= Duration::from_millis(1));
        assert!(!s.is_quiet());
    }

    #[test]
    fn debounce_mode_conversion() {
        let d = Duration::from_millis(7);
        assert_eq!(Debounce::from_mode(DebounceMode::None, d), Debounce::None);
        assert_eq!(
            Debounce::from_mode(DebounceMode::Deadline, d),
            Debounce::Deadline(d)
        );
        assert_eq!(
            Debounce::from_mode(DebounceMode::Blocking, d),
            Debounce::Blocking(d)
        );
    }
}
