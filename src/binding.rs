//! Input maps: physical inputs to UI actions.
//!
//! An [`InputMap`] is a small fixed-capacity table of [`Binding`]s, filled once
//! at startup and only read afterwards. Lookup is a linear first-match scan on
//! the exact `(source, id)` pair.

use crate::error::{Error, Result};
use crate::event::InputSource;
use serde::{Deserialize, Serialize};

/// Abstract UI operation, independent of the input that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    FocusPrev,
    FocusNext,
    Select,
    /// Adjust the focused control by `param`.
    SetRel,
    /// Set the focused control to `param`.
    SetAbs,
}

/// Resolved action with its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub param: i16,
}

/// Maps an input to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub source: InputSource,
    pub id: u16,
    pub action: ActionKind,
    #[serde(default)]
    pub param: i16,
}

impl Binding {
    pub fn new(source: InputSource, id: u16, action: ActionKind, param: i16) -> Self {
        Self {
            source,
            id,
            action,
            param,
        }
    }

    fn to_action(&self) -> Action {
        Action {
            kind: self.action,
            param: self.param,
        }
    }
}

/// Fixed-capacity input map.
#[derive(Debug, Clone)]
pub struct InputMap {
    entries: Vec<Binding>,
    capacity: usize,
}

impl InputMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a binding. Fails with [`Error::MapFull`] once the capacity is reached.
    pub fn register(
        &mut self,
        source: InputSource,
        id: u16,
        action: ActionKind,
        param: i16,
    ) -> Result<()> {
        if self.entries.len() >= self.capacity {
            return Err(Error::MapFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(Binding::new(source, id, action, param));
        Ok(())
    }

    /// First binding matching `(source, id)` exactly, if any.
    pub fn resolve(&self, source: InputSource, id: u16) -> Option<Action> {
        self.entries
            .iter()
            .find(|b| b.source == source && b.id == id)
            .map(Binding::to_action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Serializable profile of input bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Map capacity; defaults to the number of bindings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

impl BindingProfile {
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(self.bindings.len())
    }

    /// Builds the input map, registering bindings in profile order.
    pub fn build_map(&self) -> Result<InputMap> {
        let capacity = self.capacity();
        if capacity < self.bindings.len() {
            return Err(Error::CapacityTooSmall {
                capacity,
                bindings: self.bindings.len(),
            });
        }
        let mut map = InputMap::with_capacity(capacity);
        for b in &self.bindings {
            map.register(b.source, b.id, b.action, b.param)?;
        }
        Ok(map)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InputSource::{KeyDown, PinEvent};

    fn nav_map() -> InputMap {
        let mut map = InputMap::with_capacity(3);
        map.register(PinEvent, 2, ActionKind::FocusPrev, 0).unwrap();
        map.register(PinEvent, 3, ActionKind::Select, 0).unwrap();
        map.register(PinEvent, 4, ActionKind::FocusNext, 0).unwrap();
        map
    }

    #[test]
    fn resolves_registered_pins() {
        let map = nav_map();
        assert_eq!(
            map.resolve(PinEvent, 3),
            Some(Action {
                kind: ActionKind::Select,
                param: 0
            })
        );
        assert_eq!(
            map.resolve(PinEvent, 4).map(|a| a.kind),
            Some(ActionKind::FocusNext)
        );
    }

    #[test]
    fn unknown_ids_and_sources_resolve_to_nothing() {
        let map = nav_map();
        for id in [0, 1, 5, 17, u16::MAX] {
            assert_eq!(map.resolve(PinEvent, id), None);
        }
        assert_eq!(map.resolve(KeyDown, 3), None);
    }

    #[test]
    fn full_map_rejects_registration() {
        let mut map = nav_map();
        let err = map.register(PinEvent, 5, ActionKind::Select, 0).unwrap_err();
        assert!(matches!(err, Error::MapFull { capacity: 3 }));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn first_duplicate_wins() {
        let mut map = InputMap::with_capacity(2);
        map.register(PinEvent, 3, ActionKind::SetRel, 5).unwrap();
        map.register(PinEvent, 3, ActionKind::SetRel, -5).unwrap();
        assert_eq!(map.resolve(PinEvent, 3).map(|a| a.param), Some(5));
    }

    #[test]
    fn profile_builds_map() {
        let profile = BindingProfile {
            name: "panel".into(),
            description: None,
            capacity: Some(4),
            bindings: vec![
                Binding::new(PinEvent, 2, ActionKind::FocusPrev, 0),
                Binding::new(KeyDown, 0x20, ActionKind::Select, 0),
            ],
        };
        let map = profile.build_map().unwrap();
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.resolve(KeyDown, 0x20).map(|a| a.kind),
            Some(ActionKind::Select)
        );
    }

    #[test]
    fn profile_capacity_too_small() {
        let profile = BindingProfile {
            name: "tight".into(),
            description: None,
            capacity: Some(1),
            bindings: vec![
                Binding::new(PinEvent, 2, ActionKind::FocusPrev, 0),
                Binding::new(PinEvent, 4, ActionKind::FocusNext, 0),
            ],
        };
        assert!(matches!(
            profile.build_map(),
            Err(Error::CapacityTooSmall {
                capacity: 1,
                bindings: 2
            })
        ));
    }

    #[test]
    fn profile_from_json() {
        let json = r#"{
            "name": "slider",
            "bindings": [
                { "source": "pin_event", "id": 17, "action": "set_rel", "param": -10 },
                { "source": "pin_event", "id": 27, "action": "set_abs", "param": 50 }
            ]
        }"#;
        let profile = BindingProfile::from_json(json).unwrap();
        assert_eq!(profile.capacity(), 2);
        let map = profile.build_map().unwrap();
        assert_eq!(
            map.resolve(PinEvent, 17),
            Some(Action {
                kind: ActionKind::SetRel,
                param: -10
            })
        );

        let back = BindingProfile::from_json(&profile.to_json().unwrap()).unwrap();
        assert_eq!(back, profile);
    }
}
