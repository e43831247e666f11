use crate::event::{InputEvent, InputKind};
use crate::eventbus::InputListener;
use log::info;

/// A simple listener that logs all input events through `log`.
#[derive(Debug, Default)]
pub struct EventLogger;

impl EventLogger {
    pub fn new() -> Self {
        EventLogger
    }
}

impl InputListener for EventLogger {
    fn on_input(&mut self, event: &InputEvent) {
        match event.kind {
            InputKind::PinDeasserted { pin, value } => info!("[input] GPIO{pin} released ({value})"),
            InputKind::KeyDown { key } => info!("[input] key 0x{key:04x} down"),
        }
    }
}
