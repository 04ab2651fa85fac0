//!Non-blocking periodic execution for cooperative polling loops.
//!
//!Each call site owns persistent timer state and decides on every poll whether its callback is due.
//!Result of poll is [Maybe](struct.Maybe.html), which holds callback's value when it fired,
//!and can be forced to evaluate callback on demand.
//!
//!## Policies
//!
//!- [every!](macro.every.html) fires once per interval.
//!- [every_if!](macro.every_if.html) checks condition once per interval. Failed check costs full interval.
//!- [throttled!](macro.throttled.html) waits for interval, then fires on first poll at which condition holds.
//!
//!## Usage
//!
//!```
//!use exec_every::every;
//!
//!use core::cell::Cell;
//!
//!let now = Cell::new(0u32);
//!let clock = || now.get();
//!let mut fired = Vec::new();
//!
//!for time in (0..=3000).step_by(250) {
//!    now.set(time);
//!    if let Some(dt) = every!(1000, |dt: u32| dt, clock = clock).into_option() {
//!        fired.push((time, dt));
//!    }
//!}
//!
//!assert_eq!(fired, [(1000, 1000), (2000, 1000), (3000, 1000)]);
//!```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod utils;
pub mod clock;
pub mod interval;
pub mod shape;
mod state;
mod maybe;

pub use clock::Clock;
pub use interval::Interval;
pub use shape::{Callback, Condition};
pub use state::{Site, Handle};
pub use maybe::Maybe;

#[macro_export]
///Fires callback every `interval`.
///
///Each expansion owns its own [Site](struct.Site.html), which persists across polls.
///
///Accepts callback taking elapsed time `|dt: u32| ...` or no arguments `|| ...`.
///Optionally clock can be specified as last argument `clock = expr`, otherwise platform clock is used.
///
///Returns [Maybe](struct.Maybe.html).
///
///## Usage
///
///```
///use exec_every::every;
///
///fn millis() -> u32 {
///    1500
///}
///
///let result = every!(1000, || "tick", clock = millis);
///assert_eq!(result.into_option(), Some("tick"));
///```
macro_rules! every {
    ($interval:expr, $callback:expr, clock = $clock:expr $(,)?) => {{
        static SITE: $crate::Site = $crate::Site::new();
        SITE.with_clock($clock).every($interval, $callback)
    }};
    ($interval:expr, $callback:expr $(,)?) => {{
        static SITE: $crate::Site = $crate::Site::new();
        SITE.every($interval, $callback)
    }};
}

#[macro_export]
///Checks `condition` every `interval`, firing callback when it holds.
///
///Timer resets at each deadline whether condition holds or not.
///
///Condition can be `bool`, `|dt: u32| -> bool` or `|| -> bool`.
///Optionally clock can be specified as last argument `clock = expr`.
///
///## Usage
///
///```
///use exec_every::every_if;
///
///fn millis() -> u32 {
///    1500
///}
///
///let armed = false;
///assert!(every_if!(1000, armed, || "tick", clock = millis).is_empty());
///```
macro_rules! every_if {
    ($interval:expr, $condition:expr, $callback:expr, clock = $clock:expr $(,)?) => {{
        static SITE: $crate::Site = $crate::Site::new();
        SITE.with_clock($clock).every_if($interval, $condition, $callback)
    }};
    ($interval:expr, $condition:expr, $callback:expr $(,)?) => {{
        static SITE: $crate::Site = $crate::Site::new();
        SITE.every_if($interval, $condition, $callback)
    }};
}

#[macro_export]
///Waits for `interval`, then fires callback on first poll at which `condition` holds.
///
///Timer resets only when callback fires.
///
///Condition can be `bool`, `|dt: u32| -> bool` or `|| -> bool`.
///Optionally clock can be specified as last argument `clock = expr`.
///
///## Usage
///
///```
///use exec_every::throttled;
///
///fn millis() -> u32 {
///    1500
///}
///
///let result = throttled!(1000, |dt: u32| dt > 1200, |dt: u32| dt, clock = millis);
///assert_eq!(result.into_option(), Some(1500));
///```
macro_rules! throttled {
    ($interval:expr, $condition:expr, $callback:expr, clock = $clock:expr $(,)?) => {{
        static SITE: $crate::Site = $crate::Site::new();
        SITE.with_clock($clock).throttled($interval, $condition, $callback)
    }};
    ($interval:expr, $condition:expr, $callback:expr $(,)?) => {{
        static SITE: $crate::Site = $crate::Site::new();
        SITE.throttled($interval, $condition, $callback)
    }};
}
