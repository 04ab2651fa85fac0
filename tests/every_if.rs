use exec_every::{every_if, Site};

use core::cell::Cell;

#[test]
fn test_every_if_resets_on_failed_check() {
    let site = Site::new();
    let now = Cell::new(0u32);
    let clock = || now.get();
    let ready = Cell::new(false);
    let checks = Cell::new(0);

    let poll = |time: u32| {
        now.set(time);
        let condition = || {
            checks.set(checks.get() + 1);
            ready.get()
        };
        site.with_clock(clock).every_if(1000, condition, |dt: u32| dt).into_option()
    };

    assert_eq!(poll(1000), None);
    assert_eq!(checks.get(), 1);
    assert_eq!(site.last(), 1000);

    //Condition is ready, but next deadline is full interval away
    ready.set(true);
    assert_eq!(poll(1200), None);
    assert_eq!(poll(1999), None);
    assert_eq!(checks.get(), 1);

    assert_eq!(poll(2000), Some(1000));
    assert_eq!(checks.get(), 2);
}

#[test]
fn test_every_if_condition_receives_elapsed() {
    let site = Site::new();
    let now = Cell::new(1500u32);
    let clock = || now.get();
    let seen = Cell::new(0);

    let result = site.with_clock(clock).every_if(1000, |dt: u32| {
        seen.set(dt);
        true
    }, || "run");

    assert_eq!(result.into_option(), Some("run"));
    assert_eq!(seen.get(), 1500);
}

#[test]
fn test_every_if_macro_with_bool() {
    let now = Cell::new(0u32);
    let clock = || now.get();

    let poll = |time: u32, condition: bool| {
        now.set(time);
        every_if!(500, condition, || (), clock = clock).is_present()
    };

    assert!(!poll(500, false));
    assert!(!poll(600, true));
    assert!(poll(1000, true));
}
