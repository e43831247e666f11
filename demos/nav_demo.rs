//! Button-panel navigation demo.
//!
//! Builds the reference page (box, quit button, counter, two progress bars,
//! checkbox, radio pair, slider) and drives it from three simulated GPIO
//! buttons plus two injected keys that nudge the slider. Pass a TOML config
//! path to use a different pin layout.
//!
//! Run with `RUST_LOG=debug cargo run --example nav_demo` to watch edges.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::info;
use pinnav::config::{PIN_NEXT, PIN_PREV, PIN_SEL};
use pinnav::{
    ActionKind, Binding, Config, EventFilter, EventLogger, InputManager, InputSource, Page,
    PageEvent, VirtualPins, Widget,
};

const E_BOX: u16 = 0;
const E_BTN_QUIT: u16 = 1;
const E_TXT_COUNT: u16 = 2;
const E_PROGRESS: u16 = 3;
const E_PROGRESS1: u16 = 4;
const E_CHECK1: u16 = 5;
const E_RADIO1: u16 = 6;
const E_RADIO2: u16 = 7;
const E_SLIDER: u16 = 8;
const E_TXT_SLIDER: u16 = 9;

const KEY_PLUS: u16 = b'+' as u16;
const KEY_MINUS: u16 = b'-' as u16;

enum Step {
    Click(u16),
    Key(u16),
}

fn build_page() -> pinnav::Result<Page> {
    let mut page = Page::new();
    page.add(Widget::boxed(E_BOX))?;
    page.add(Widget::button(E_BTN_QUIT, "Quit"))?;
    page.add(Widget::text(E_TXT_COUNT, ""))?;
    page.add(Widget::progress(E_PROGRESS, 0, 100, 0))?;
    page.add(Widget::progress(E_PROGRESS1, -25, 75, -15))?;
    page.add(Widget::checkbox(E_CHECK1, false))?;
    page.add(Widget::radio(E_RADIO1, 1, true))?;
    page.add(Widget::radio(E_RADIO2, 1, true))?;
    page.add(Widget::slider(E_SLIDER, 0, 100, 60))?;
    page.add(Widget::text(E_TXT_SLIDER, "Slider: ???"))?;
    Ok(page)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).expect("load config"),
        None => Config::default(),
    };
    config.input_map.capacity = Some(config.input_map.bindings.len() + 2);
    config.input_map.bindings.extend([
        Binding::new(InputSource::KeyDown, KEY_PLUS, ActionKind::SetRel, 5),
        Binding::new(InputSource::KeyDown, KEY_MINUS, ActionKind::SetRel, -5),
    ]);

    let pins = VirtualPins::from_meta("sim-panel", &config.pins);
    let mut input = InputManager::from_config(pins, &config).expect("input manager");
    input
        .bus_mut()
        .add_listener(EventLogger::new(), EventFilter::All, None);

    let mut page = build_page().expect("page layout");

    let quit = Arc::new(AtomicBool::new(false));
    {
        let quit = quit.clone();
        ctrlc::set_handler(move || quit.store(true, Ordering::SeqCst)).expect("ctrl-c handler");
    }

    let mut script = vec![
        Step::Click(PIN_NEXT),
        Step::Click(PIN_NEXT),
        Step::Click(PIN_SEL),
        Step::Click(PIN_NEXT),
        Step::Click(PIN_NEXT),
        Step::Click(PIN_SEL),
        Step::Click(PIN_NEXT),
        Step::Key(KEY_PLUS),
        Step::Key(KEY_PLUS),
        Step::Key(KEY_MINUS),
        Step::Click(PIN_PREV),
        Step::Click(PIN_NEXT),
        Step::Click(PIN_NEXT),
        Step::Click(PIN_SEL),
    ]
    .into_iter();
    let mut held: Option<u16> = None;

    let mut count: u32 = 0;
    while !quit.load(Ordering::SeqCst) {
        count += 1;

        // Feed the simulated panel: every 50 frames press or release a button.
        if count % 50 == 0 {
            match held.take() {
                Some(pin) => input.reader_mut().release(pin),
                None => match script.next() {
                    Some(Step::Click(pin)) => {
                        input.reader_mut().press(pin);
                        held = Some(pin);
                    }
                    Some(Step::Key(key)) => input.inject_key(key),
                    None => quit.store(true, Ordering::SeqCst),
                },
            }
        }

        if let Some(dispatch) = input.poll_action() {
            if let Some(action) = dispatch.action {
                match page.apply(action) {
                    Some(PageEvent::Activated(E_BTN_QUIT)) => {
                        info!("quit selected");
                        quit.store(true, Ordering::SeqCst);
                    }
                    Some(ev) => info!("{:?} -> {:?}", action.kind, ev),
                    None => {}
                }
            }
        }

        page.set_text(E_TXT_COUNT, &count.to_string());
        page.set_progress(E_PROGRESS, ((count / 200) % 100) as i16);

        let pos = page.slider_pos(E_SLIDER).unwrap_or(0);
        page.set_text(E_TXT_SLIDER, &format!("Slider: {pos}"));
        page.set_progress(E_PROGRESS1, (f32::from(pos) * 80.0 / 100.0) as i16 - 15);

        std::thread::sleep(Duration::from_millis(2));
    }

    info!(
        "frames={} check1={:?} radio={:?} slider={:?}",
        count,
        page.is_checked(E_CHECK1),
        page.checked_in_group(1),
        page.slider_pos(E_SLIDER)
    );
}
