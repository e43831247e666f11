//! Host-side glue: sampler + input map + event bus.
//!
//! [`InputManager`] is what a UI main loop talks to. Once per tick it calls
//! [`poll_action`](InputManager::poll_action), which:
//! - polls the [`PinSampler`] once (at most one pin release per call),
//! - otherwise pops one key press queued with [`inject_key`](InputManager::inject_key),
//! - timestamps the input and fans it out to the [`InputEventBus`],
//! - resolves it against the [`InputMap`].
//!
//! The manager never touches widgets; applying the resulting [`Action`] is the
//! caller's business (see [`Page::apply`](crate::page::Page::apply)).

use crate::binding::{Action, InputMap};
use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::device::PinReader;
use crate::error::Result;
use crate::event::{InputEvent, InputKind, KeyCode};
use crate::eventbus::InputEventBus;
use crate::sampler::PinSampler;
use crate::snapshot::Snapshot;
use log::info;
use std::collections::VecDeque;

/// One input and the action it maps to, if any.
#[derive(Clone, Debug)]
pub struct Dispatch {
    pub event: InputEvent,
    pub action: Option<Action>,
}

pub struct InputManager<R, C = MonotonicClock> {
    sampler: PinSampler<R, C>,
    map: InputMap,
    bus: InputEventBus,
    keys: VecDeque<KeyCode>,
}

impl<R: PinReader> InputManager<R> {
    /// Build sampler and map from a validated config.
    pub fn from_config(reader: R, config: &Config) -> Result<Self> {
        Self::from_config_with_clock(reader, config, MonotonicClock)
    }
}

impl<R: PinReader, C: Clock> InputManager<R, C> {
    pub fn new(sampler: PinSampler<R, C>, map: InputMap) -> Self {
        Self {
            sampler,
            map,
            bus: InputEventBus::new(),
            keys: VecDeque::new(),
        }
    }

    pub fn from_config_with_clock(reader: R, config: &Config, clock: C) -> Result<Self> {
        config.validate()?;
        let sampler = PinSampler::with_clock(reader, &config.pin_ids(), clock)?
            .with_debounce(config.debounce.debounce());
        let map = config.input_map.build_map()?;

        info!(
            "{}: monitoring {} pin(s) [{}], {} binding(s) in map '{}', debounce {:?}",
            sampler.reader().id(),
            config.pins.len(),
            config
                .pins
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            map.len(),
            config.input_map.name,
            sampler.debounce(),
        );

        Ok(Self::new(sampler, map))
    }

    /// Queue a key press to be reported after pending pin releases.
    pub fn inject_key(&mut self, key: KeyCode) {
        self.keys.push_back(key);
    }

    /// Next input, if any: one pin release, else one queued key.
    pub fn next_event(&mut self) -> Option<InputEvent> {
        let kind = match self.sampler.poll() {
            Some(edge) => InputKind::from(edge),
            None => InputKind::KeyDown {
                key: self.keys.pop_front()?,
            },
        };
        Some(InputEvent {
            at: std::time::Instant::now(),
            kind,
        })
    }

    /// Poll once, notify listeners and resolve the input to an action.
    pub fn poll_action(&mut self) -> Option<Dispatch> {
        let event = self.next_event()?;
        self.bus.emit(&event);
        let action = self.map.resolve(event.kind.source(), event.kind.id());
        Some(Dispatch { event, action })
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sampler.snapshot()
    }

    pub fn sampler(&self) -> &PinSampler<R, C> {
        &self.sampler
    }

    pub fn reader_mut(&mut self) -> &mut R {
        self.sampler.reader_mut()
    }

    pub fn map(&self) -> &InputMap {
        &self.map
    }

    pub fn bus_mut(&mut self) -> &mut InputEventBus {
        &mut self.bus
    }
}
