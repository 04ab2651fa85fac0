//!Call site state

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::clock::{Clock, Monotonic};
use crate::interval::Interval;
use crate::maybe::Maybe;
use crate::shape::{Callback, Condition};

///Persistent timer state of a call site.
///
///Stores timestamp of last firing (or reset), initially zero.
///
///Macros [every!](macro.every.html), [every_if!](macro.every_if.html) and [throttled!](macro.throttled.html)
///declare one `static` instance per expansion, but `Site` can be owned directly as well,
///for example as a field of a struct driven by polling loop.
///
///## Note
///
///State is not synchronized beyond being `Sync`, polling the same site from multiple threads is not supported.
///
///Callback is expected to be the same on every poll of the site.
///If you need to vary work, dispatch inside of callback.
///
///## Usage
///
///```
///use exec_every::Site;
///
///use core::cell::Cell;
///
///let site = Site::new();
///let now = Cell::new(0u32);
///let clock = || now.get();
///
///now.set(500);
///assert!(site.with_clock(clock).every(1000, |dt: u32| dt).is_empty());
///
///now.set(1000);
///assert_eq!(site.with_clock(clock).every(1000, |dt: u32| dt).into_option(), Some(1000));
///```
pub struct Site {
    last: AtomicU32,
}

impl Site {
    ///Creates new state with last firing at zero.
    pub const fn new() -> Self {
        Self {
            last: AtomicU32::new(0),
        }
    }

    #[inline(always)]
    ///Returns timestamp of last firing or reset.
    pub fn last(&self) -> u32 {
        self.last.load(Ordering::Relaxed)
    }

    #[inline(always)]
    ///Sets timestamp of last firing.
    ///
    ///Useful to make the site fire on its first poll, by seeding it with `now - interval`.
    pub fn reset_at(&self, timestamp: u32) {
        self.last.store(timestamp, Ordering::Relaxed)
    }

    #[inline(always)]
    ///Creates handle, using specified clock.
    pub fn with_clock<C: Clock>(&self, clock: C) -> Handle<'_, C> {
        Handle::new(self, clock)
    }

    #[inline(always)]
    ///Creates handle, using platform clock.
    pub fn handle(&self) -> Handle<'_> {
        Handle::new(self, Monotonic)
    }

    #[inline]
    ///Fires every `interval`, using platform clock.
    pub fn every<I, F, FS>(&self, interval: I, callback: F) -> Maybe<'_, F::Output, F>
        where I: Interval, F: Callback<FS>
    {
        self.handle().every(interval, callback)
    }

    #[inline]
    ///Checks `condition` every `interval`, using platform clock.
    pub fn every_if<I, R, RS, F, FS>(&self, interval: I, condition: R, callback: F) -> Maybe<'_, F::Output, F>
        where I: Interval, R: Condition<RS>, F: Callback<FS>
    {
        self.handle().every_if(interval, condition, callback)
    }

    #[inline]
    ///Fires as soon as `condition` holds after `interval`, using platform clock.
    pub fn throttled<I, T, TS, F, FS>(&self, interval: I, condition: T, callback: F) -> Maybe<'_, F::Output, F>
        where I: Interval, T: Condition<TS>, F: Callback<FS>
    {
        self.handle().throttled(interval, condition, callback)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site").field("last", &self.last()).finish()
    }
}

#[derive(Clone, Copy)]
///Non-owning reference to call site's state, paired with clock.
///
///Every [Maybe](struct.Maybe.html) carries one, regardless of whether callback has fired.
///
///## Usage
///
///```
///use exec_every::{Clock, Site};
///
///let site = Site::new();
///let clock = || 250u32;
///
///let result = site.with_clock(clock).every(1000, || ());
///let handle = result.handle();
///
///assert!(core::ptr::eq(handle.site(), &site));
///assert_eq!(handle.clock().now(), 250);
///assert_eq!(handle.elapsed(), 250);
///
///handle.reset();
///assert_eq!(site.last(), 250);
///```
pub struct Handle<'s, C = Monotonic> {
    site: &'s Site,
    clock: C,
}

impl<'s, C: Clock> Handle<'s, C> {
    ///Creates new instance
    pub fn new(site: &'s Site, clock: C) -> Self {
        Self {
            site,
            clock,
        }
    }

    #[inline(always)]
    ///Accesses referenced state.
    pub fn site(&self) -> &'s Site {
        self.site
    }

    #[inline(always)]
    ///Accesses clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    ///Returns time elapsed since last firing or reset.
    ///
    ///Computed with wrapping subtraction, so it stays correct across a single wraparound of clock.
    pub fn elapsed(&self) -> u32 {
        self.clock.now().wrapping_sub(self.site.last())
    }

    ///Resets timer, as if callback has just fired.
    ///
    ///Next firing requires full interval to pass.
    pub fn reset(&self) {
        let now = self.clock.now();
        log::trace!("site reset at {}", now);
        self.site.reset_at(now);
    }

    ///Performs scheduling decision.
    ///
    ///1. If less than `interval` passed since last firing, returns empty result.
    ///2. If `throttle` doesn't hold, returns empty result without resetting timer.
    ///3. Resets timer.
    ///4. If `run` holds, invokes `callback` and returns its result, otherwise empty result.
    ///
    ///Both conditions receive elapsed time, if they accept it.
    pub fn dispatch<I, R, RS, T, TS, F, FS>(self, interval: I, mut run: R, mut throttle: T, mut callback: F) -> Maybe<'s, F::Output, F, C>
        where I: Interval, R: Condition<RS>, T: Condition<TS>, F: Callback<FS>
    {
        let interval = interval.ticks();
        let now = self.clock.now();
        let dt = now.wrapping_sub(self.site.last());

        if dt < interval {
            return Maybe::empty(self, callback);
        }

        if !throttle.check(dt) {
            log::trace!("throttled at {}: {} elapsed, not ready", now, dt);
            return Maybe::empty(self, callback);
        }

        self.site.reset_at(now);

        if !run.check(dt) {
            log::trace!("skipped at {}: {} elapsed, condition not met", now, dt);
            return Maybe::empty(self, callback);
        }

        log::trace!("fired at {}: {} elapsed", now, dt);
        let value = callback.call(dt);
        Maybe::present(value, self, callback)
    }

    #[inline]
    ///Fires every `interval` unconditionally.
    pub fn every<I, F, FS>(self, interval: I, callback: F) -> Maybe<'s, F::Output, F, C>
        where I: Interval, F: Callback<FS>
    {
        self.dispatch(interval, true, true, callback)
    }

    #[inline]
    ///Checks `condition` every `interval`.
    ///
    ///Timer is reset at every deadline, so failed check delays next attempt by full `interval`.
    pub fn every_if<I, R, RS, F, FS>(self, interval: I, condition: R, callback: F) -> Maybe<'s, F::Output, F, C>
        where I: Interval, R: Condition<RS>, F: Callback<FS>
    {
        self.dispatch(interval, condition, true, callback)
    }

    #[inline]
    ///Fires on first poll after `interval` at which `condition` holds.
    ///
    ///Timer is reset only once condition is satisfied, so it is checked on every poll past deadline.
    pub fn throttled<I, T, TS, F, FS>(self, interval: I, condition: T, callback: F) -> Maybe<'s, F::Output, F, C>
        where I: Interval, T: Condition<TS>, F: Callback<FS>
    {
        self.dispatch(interval, true, condition, callback)
    }
}

impl<C> fmt::Debug for Handle<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("site", self.site).finish()
    }
}
