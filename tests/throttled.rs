use exec_every::{throttled, Site};

use core::cell::Cell;

#[test]
fn test_throttled_scenario() {
    let now = Cell::new(0u32);
    let clock = || now.get();

    let poll = |time: u32| {
        now.set(time);
        let ready = || now.get() >= 1200;
        throttled!(500, ready, |dt: u32| dt, clock = clock).into_option()
    };

    assert_eq!(poll(500), None);
    assert_eq!(poll(800), None);
    assert_eq!(poll(1200), Some(1200));
    assert_eq!(poll(1500), None);
    assert_eq!(poll(1700), Some(500));
}

#[test]
fn test_throttled_keeps_timer_until_ready() {
    let site = Site::new();
    let now = Cell::new(0u32);
    let clock = || now.get();
    let checks = Cell::new(0);

    let poll = |time: u32, ready: bool| {
        now.set(time);
        let condition = |_: u32| {
            checks.set(checks.get() + 1);
            ready
        };
        site.with_clock(clock).throttled(1000, condition, || ()).is_present()
    };

    assert!(!poll(999, true));
    assert_eq!(checks.get(), 0);

    assert!(!poll(1000, false));
    assert!(!poll(1001, false));
    assert!(!poll(1002, false));
    assert_eq!(checks.get(), 3);
    assert_eq!(site.last(), 0);

    assert!(poll(1003, true));
    assert_eq!(site.last(), 1003);

    assert!(!poll(1004, true));
    assert_eq!(checks.get(), 4);
}
