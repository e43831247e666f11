//! Headless page model: widget state and keyboard-style focus.
//!
//! A [`Page`] is the receiving end of an [`Action`]. It keeps the values of the
//! usual panel widgets and a focus cursor that moves over the focusable ones
//! (buttons, checkboxes, radios, sliders). Nothing here draws; a renderer reads
//! the state back out.
//!
//! # Example
//! ```
//! use pinnav::{Action, ActionKind, Page, PageEvent, Widget};
//!
//! let mut page = Page::new();
//! page.add(Widget::button(1, "Quit")).unwrap();
//! page.add(Widget::checkbox(2, false)).unwrap();
//!
//! let next = Action { kind: ActionKind::FocusNext, param: 0 };
//! let select = Action { kind: ActionKind::Select, param: 0 };
//! assert_eq!(page.apply(next), Some(PageEvent::FocusChanged(1)));
//! assert_eq!(page.apply(select), Some(PageEvent::Activated(1)));
//! ```

use crate::binding::{Action, ActionKind};
use crate::error::{Error, Result};

pub type WidgetId = u16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Box,
    Button { label: String },
    Text { text: String },
    Progress { min: i16, max: i16, value: i16 },
    Checkbox { checked: bool },
    Radio { group: u16, checked: bool },
    Slider { min: i16, max: i16, pos: i16 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
}

impl Widget {
    pub fn boxed(id: WidgetId) -> Self {
        Self {
            id,
            kind: WidgetKind::Box,
        }
    }

    pub fn button(id: WidgetId, label: &str) -> Self {
        Self {
            id,
            kind: WidgetKind::Button {
                label: label.to_string(),
            },
        }
    }

    pub fn text(id: WidgetId, text: &str) -> Self {
        Self {
            id,
            kind: WidgetKind::Text {
                text: text.to_string(),
            },
        }
    }

    /// `min`/`max` may straddle zero (e.g. -25..75); `value` is clamped.
    pub fn progress(id: WidgetId, min: i16, max: i16, value: i16) -> Self {
        Self {
            id,
            kind: WidgetKind::Progress {
                min,
                max,
                value: value.clamp(min, max),
            },
        }
    }

    pub fn checkbox(id: WidgetId, checked: bool) -> Self {
        Self {
            id,
            kind: WidgetKind::Checkbox { checked },
        }
    }

    pub fn radio(id: WidgetId, group: u16, checked: bool) -> Self {
        Self {
            id,
            kind: WidgetKind::Radio { group, checked },
        }
    }

    pub fn slider(id: WidgetId, min: i16, max: i16, pos: i16) -> Self {
        Self {
            id,
            kind: WidgetKind::Slider {
                min,
                max,
                pos: pos.clamp(min, max),
            },
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(
            self.kind,
            WidgetKind::Button { .. }
                | WidgetKind::Checkbox { .. }
                | WidgetKind::Radio { .. }
                | WidgetKind::Slider { .. }
        )
    }
}

/// Outcome of applying an action to a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    FocusChanged(WidgetId),
    /// A button (or slider) was selected.
    Activated(WidgetId),
    Toggled { id: WidgetId, checked: bool },
    RadioSelected { id: WidgetId, group: u16 },
    SliderMoved { id: WidgetId, pos: i16 },
}

/// One page of widgets, in focus order.
#[derive(Clone, Debug, Default)]
pub struct Page {
    widgets: Vec<Widget>,
    focus: Option<usize>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, widget: Widget) -> Result<()> {
        if self.widgets.iter().any(|w| w.id == widget.id) {
            return Err(Error::DuplicateWidget(widget.id));
        }
        self.widgets.push(widget);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    fn kind_mut(&mut self, id: WidgetId) -> Option<&mut WidgetKind> {
        self.widgets
            .iter_mut()
            .find(|w| w.id == id)
            .map(|w| &mut w.kind)
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.map(|i| self.widgets[i].id)
    }

    /// Apply a navigation/selection action. Returns what changed, if anything.
    pub fn apply(&mut self, action: Action) -> Option<PageEvent> {
        match action.kind {
            ActionKind::FocusNext => self.step_focus(true),
            ActionKind::FocusPrev => self.step_focus(false),
            ActionKind::Select => self.select(),
            ActionKind::SetRel => self.move_slider(|pos| pos + i32::from(action.param)),
            ActionKind::SetAbs => self.move_slider(|_| i32::from(action.param)),
        }
    }

    fn step_focus(&mut self, forward: bool) -> Option<PageEvent> {
        let focusable: Vec<usize> = (0..self.widgets.len())
            .filter(|&i| self.widgets[i].is_focusable())
            .collect();
        let n = focusable.len();
        if n == 0 {
            return None;
        }

        let at = self
            .focus
            .and_then(|cur| focusable.iter().position(|&i| i == cur));
        let next = match (at, forward) {
            (None, true) => 0,
            (None, false) => n - 1,
            (Some(p), true) => (p + 1) % n,
            (Some(p), false) => (p + n - 1) % n,
        };

        self.focus = Some(focusable[next]);
        self.focused().map(PageEvent::FocusChanged)
    }

    fn select(&mut self) -> Option<PageEvent> {
        let idx = self.focus?;
        let id = self.widgets[idx].id;

        if let WidgetKind::Radio { group, .. } = self.widgets[idx].kind {
            for w in self.widgets.iter_mut() {
                if let WidgetKind::Radio { group: g, checked } = &mut w.kind {
                    if *g == group {
                        *checked = w.id == id;
                    }
                }
            }
            return Some(PageEvent::RadioSelected { id, group });
        }

        match &mut self.widgets[idx].kind {
            WidgetKind::Button { .. } | WidgetKind::Slider { .. } => Some(PageEvent::Activated(id)),
            WidgetKind::Checkbox { checked } => {
                *checked = !*checked;
                Some(PageEvent::Toggled {
                    id,
                    checked: *checked,
                })
            }
            _ => None,
        }
    }

    fn move_slider(&mut self, to: impl FnOnce(i32) -> i32) -> Option<PageEvent> {
        let idx = self.focus?;
        let id = self.widgets[idx].id;
        match &mut self.widgets[idx].kind {
            WidgetKind::Slider { min, max, pos } => {
                let target = to(i32::from(*pos)).clamp(i32::from(*min), i32::from(*max));
                *pos = target as i16;
                Some(PageEvent::SliderMoved { id, pos: *pos })
            }
            _ => None,
        }
    }

    /// Replace a text widget's string. Returns `false` if `id` is not a text widget.
    pub fn set_text(&mut self, id: WidgetId, value: &str) -> bool {
        match self.kind_mut(id) {
            Some(WidgetKind::Text { text }) => {
                text.clear();
                text.push_str(value);
                true
            }
            _ => false,
        }
    }

    pub fn text(&self, id: WidgetId) -> Option<&str> {
        match &self.widget(id)?.kind {
            WidgetKind::Text { text } => Some(text),
            WidgetKind::Button { label } => Some(label),
            _ => None,
        }
    }

    /// Set a progress bar, clamped to its range.
    pub fn set_progress(&mut self, id: WidgetId, v: i16) -> bool {
        match self.kind_mut(id) {
            Some(WidgetKind::Progress { min, max, value }) => {
                *value = v.clamp(*min, *max);
                true
            }
            _ => false,
        }
    }

    pub fn progress(&self, id: WidgetId) -> Option<i16> {
        match self.widget(id)?.kind {
            WidgetKind::Progress { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn slider_pos(&self, id: WidgetId) -> Option<i16> {
        match self.widget(id)?.kind {
            WidgetKind::Slider { pos, .. } => Some(pos),
            _ => None,
        }
    }

    pub fn is_checked(&self, id: WidgetId) -> Option<bool> {
        match self.widget(id)?.kind {
            WidgetKind::Checkbox { checked } | WidgetKind::Radio { checked, .. } => Some(checked),
            _ => None,
        }
    }

    /// The checked radio in `group`, if any.
    pub fn checked_in_group(&self, group: u16) -> Option<WidgetId> {
        self.widgets.iter().find_map(|w| match w.kind {
            WidgetKind::Radio { group: g, checked } if g == group && checked => Some(w.id),
            _ => None,
        })
    }
}
