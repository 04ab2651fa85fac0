use exec_every::Site;

use core::cell::Cell;

#[test]
fn test_wraparound_elapsed() {
    let site = Site::new();
    let now = Cell::new(u32::max_value() - 99);
    let clock = || now.get();

    site.with_clock(clock).reset();
    assert_eq!(site.last(), u32::max_value() - 99);

    now.set(50);
    assert_eq!(site.with_clock(clock).elapsed(), 150);
    assert!(site.with_clock(clock).every(200u32, || ()).is_empty());

    now.set(100);
    assert_eq!(site.with_clock(clock).every(200u32, |dt: u32| dt).into_option(), Some(200));
    assert_eq!(site.last(), 100);
}
