use std::time::Duration;

use pinnav::{
    Action, ActionKind, Config, EdgeEvent, InputManager, InputMap, InputSource, Level,
    ManualClock, Page, PageEvent, PinSampler, VirtualPins, Widget,
};

const PREV: u16 = 2;
const SEL: u16 = 3;
const NEXT: u16 = 4;

fn nav_map() -> InputMap {
    let mut map = InputMap::with_capacity(3);
    map.register(InputSource::PinEvent, PREV, ActionKind::FocusPrev, 0)
        .unwrap();
    map.register(InputSource::PinEvent, SEL, ActionKind::Select, 0)
        .unwrap();
    map.register(InputSource::PinEvent, NEXT, ActionKind::FocusNext, 0)
        .unwrap();
    map
}

fn sampler() -> (PinSampler<VirtualPins, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let pins = VirtualPins::new("panel", &[PREV, SEL, NEXT]);
    let s = PinSampler::with_clock(pins, &[PREV, SEL, NEXT], clock.clone()).unwrap();
    (s, clock)
}

#[test]
fn select_release_resolves_once() {
    let map = nav_map();
    let (mut s, clock) = sampler();
    assert_eq!(s.poll(), None);

    s.reader_mut().press(SEL);
    for _ in 0..10 {
        assert_eq!(s.poll(), None);
        clock.advance(Duration::from_millis(1));
    }

    s.reader_mut().release(SEL);
    let ev = s.poll();
    assert_eq!(ev, Some(EdgeEvent { pin: SEL, value: 1 }));

    for _ in 0..10 {
        clock.advance(Duration::from_millis(3));
        assert_eq!(s.poll(), None);
    }

    assert_eq!(
        map.resolve(InputSource::PinEvent, SEL),
        Some(Action {
            kind: ActionKind::Select,
            param: 0
        })
    );
}

#[test]
fn thousand_idle_polls_report_nothing() {
    let (mut s, clock) = sampler();
    for _ in 0..1000 {
        assert_eq!(s.poll(), None);
        clock.advance(Duration::from_micros(500));
    }
}

#[test]
fn identical_levels_never_fire() {
    let (mut s, clock) = sampler();
    s.poll();
    for level in [Level::Low, Level::High] {
        for pin in [PREV, SEL, NEXT] {
            s.reader_mut().set_level(pin, level);
        }
        // First poll may observe a transition; every later one sees the same levels.
        s.poll();
        while s.poll().is_some() {}
        for _ in 0..20 {
            clock.advance(Duration::from_millis(10));
            assert_eq!(s.poll(), None);
        }
    }
}

#[test]
fn press_never_fires() {
    let (mut s, clock) = sampler();
    s.poll();
    for pin in [PREV, SEL, NEXT] {
        s.reader_mut().press(pin);
        clock.advance(Duration::from_millis(10));
        assert_eq!(s.poll(), None);
    }
}

#[test]
fn simultaneous_releases_one_per_call() {
    let (mut s, clock) = sampler();
    s.poll();
    s.reader_mut().press(NEXT);
    s.reader_mut().press(PREV);
    s.reader_mut().press(SEL);
    s.poll();
    clock.advance(Duration::from_millis(20));

    s.reader_mut().release(SEL);
    s.reader_mut().release(NEXT);
    s.reader_mut().release(PREV);

    let drained: Vec<u16> = std::iter::from_fn(|| s.poll().map(|e| e.pin)).collect();
    assert_eq!(drained, vec![PREV, SEL, NEXT]);
}

#[test]
fn unregistered_pins_have_no_action() {
    let map = nav_map();
    for pin in (0..64).filter(|p| ![PREV, SEL, NEXT].contains(p)) {
        assert_eq!(map.resolve(InputSource::PinEvent, pin), None);
    }
}

#[test]
fn buttons_drive_page_focus() {
    let cfg = Config::default();
    let clock = ManualClock::new();
    let pins = VirtualPins::from_meta("panel", &cfg.pins);
    let mut input = InputManager::from_config_with_clock(pins, &cfg, clock.clone()).unwrap();

    let mut page = Page::new();
    page.add(Widget::boxed(10)).unwrap();
    page.add(Widget::button(11, "Quit")).unwrap();
    page.add(Widget::checkbox(12, false)).unwrap();
    page.add(Widget::slider(13, 0, 100, 60)).unwrap();

    let mut click = |pin: u16| -> Option<PageEvent> {
        input.reader_mut().press(pin);
        assert!(input.poll_action().is_none());
        clock.advance(Duration::from_millis(10));
        input.reader_mut().release(pin);
        let action = input.poll_action()?.action?;
        clock.advance(Duration::from_millis(10));
        page.apply(action)
    };

    assert_eq!(click(NEXT), Some(PageEvent::FocusChanged(11)));
    assert_eq!(click(NEXT), Some(PageEvent::FocusChanged(12)));
    assert_eq!(
        click(SEL),
        Some(PageEvent::Toggled {
            id: 12,
            checked: true
        })
    );
    assert_eq!(click(PREV), Some(PageEvent::FocusChanged(11)));
    assert_eq!(click(SEL), Some(PageEvent::Activated(11)));
}
