//!Clock sources
//!
//!Timer state is measured in `u32` ticks, which wrap around on overflow.
//!Every clock in this module counts milliseconds.

///Describes source of time for call sites.
///
///Must be monotonic, modulo wraparound of `u32`.
///
///Any `Fn() -> u32` is a clock, which makes it easy to plug board specific counters:
///
///```
///use exec_every::Clock;
///
///fn millis() -> u32 {
///    42
///}
///
///assert_eq!(millis.now(), 42);
///```
pub trait Clock {
    ///Returns current timestamp.
    fn now(&self) -> u32;
}

impl<F: Fn() -> u32> Clock for F {
    #[inline(always)]
    fn now(&self) -> u32 {
        (self)()
    }
}

#[cfg(all(unix, not(target_arch = "wasm32")))]
mod posix;
#[cfg(all(unix, not(target_arch = "wasm32")))]
use posix as platform;

#[cfg(windows)]
mod win;
#[cfg(windows)]
use win as platform;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
use web as platform;

#[cfg(all(feature = "std", not(any(unix, windows, target_arch = "wasm32"))))]
mod instant;
#[cfg(all(feature = "std", not(any(unix, windows, target_arch = "wasm32"))))]
use instant as platform;

#[cfg(not(any(feature = "std", unix, windows, target_arch = "wasm32")))]
mod dummy;
#[cfg(not(any(feature = "std", unix, windows, target_arch = "wasm32")))]
use dummy as platform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
///Platform millisecond counter.
///
///## Implementations:
///
///- Unix uses `clock_gettime` with `CLOCK_MONOTONIC`
///- Windows uses `GetTickCount`
///- Wasm uses Web API `performance.now()`
///- With `std` feature other targets use `Instant`, counting from first use.
///- Dummy clock is used when no implementation is available. Panics when used.
pub struct Monotonic;

impl Clock for Monotonic {
    #[inline(always)]
    fn now(&self) -> u32 {
        platform::now_ms()
    }
}

///Platform alias to the default clock.
///
///```
///use exec_every::Site;
///use exec_every::clock::Platform;
///
///let site = Site::new();
///let handle = site.with_clock(Platform::default());
///assert_eq!(handle.clock(), &Platform::default());
///```
pub type Platform = Monotonic;
