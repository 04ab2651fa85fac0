//!Optional result of call site

use core::fmt;

use crate::clock::{Clock, Monotonic};
use crate::shape::Callback;
use crate::state::Handle;

#[derive(Clone)]
///Result of polling call site.
///
///Holds value returned by callback, if it has fired on this poll, and
///[Handle](struct.Handle.html) to the site's state in any case.
///
///Callbacks returning `()` produce presence-only result,
///while callbacks returning reference produce result aliasing referenced value.
///
///## Note
///
///Callback is captured by result, so that it can be evaluated on demand by [force](#method.force).
///Callback has already run by the time result is returned, so discarding it is fine.
///
///## Usage
///
///```
///use exec_every::Site;
///
///let site = Site::new();
///let clock = || 10u32;
///
///let mut result = site.with_clock(clock).every(1000, || 42);
///assert!(result.is_empty());
///
///assert_eq!(*result.force(), 42);
///assert_eq!(result.value(), &42);
///```
pub struct Maybe<'s, T, F, C = Monotonic> {
    value: Option<T>,
    handle: Handle<'s, C>,
    callback: F,
}

impl<'s, T, F, C> Maybe<'s, T, F, C> {
    #[inline(always)]
    pub(crate) fn empty(handle: Handle<'s, C>, callback: F) -> Self {
        Self {
            value: None,
            handle,
            callback,
        }
    }

    #[inline(always)]
    pub(crate) fn present(value: T, handle: Handle<'s, C>, callback: F) -> Self {
        Self {
            value: Some(value),
            handle,
            callback,
        }
    }

    #[inline(always)]
    ///Returns whether value is present.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline(always)]
    ///Returns whether value is absent.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    #[inline(always)]
    ///Accesses handle of call site that produced this result.
    pub fn handle(&self) -> &Handle<'s, C> {
        &self.handle
    }

    #[inline(always)]
    ///Returns reference to value, if present.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline(always)]
    ///Returns mutable reference to value, if present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    ///Returns reference to value.
    ///
    ///## Panics
    ///
    ///If value is absent.
    pub fn value(&self) -> &T {
        match self.value {
            Some(ref value) => value,
            None => panic!("Access to value of empty Maybe"),
        }
    }

    ///Returns mutable reference to value.
    ///
    ///## Panics
    ///
    ///If value is absent.
    pub fn value_mut(&mut self) -> &mut T {
        match self.value {
            Some(ref mut value) => value,
            None => panic!("Access to value of empty Maybe"),
        }
    }

    #[inline(always)]
    ///Moves value out, leaving result empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline(always)]
    ///Converts into value, if present.
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<'s, T, F, C: Clock> Maybe<'s, T, F, C> {
    ///Returns value, invoking callback if it is absent.
    ///
    ///Callback is invoked immediately, regardless of interval and conditions,
    ///with time elapsed since last firing.
    ///Timer is not reset, so regular polling of call site is not affected.
    ///
    ///Present value is returned as it is, without invoking callback.
    pub fn force<S>(&mut self) -> &mut T where F: Callback<S, Output = T> {
        let handle = &self.handle;
        let callback = &mut self.callback;

        self.value.get_or_insert_with(|| {
            let dt = handle.elapsed();
            log::trace!("forced: {} elapsed", dt);
            callback.call(dt)
        })
    }

    #[inline(always)]
    ///Resets timer of originating call site.
    pub fn reset(&self) {
        self.handle.reset()
    }
}

impl<T, F, C> From<Maybe<'_, T, F, C>> for Option<T> {
    #[inline(always)]
    fn from(maybe: Maybe<'_, T, F, C>) -> Self {
        maybe.value
    }
}

impl<T: fmt::Debug, F, C> fmt::Debug for Maybe<'_, T, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maybe").field("value", &self.value).field("handle", &self.handle).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Site;

    use core::cell::Cell;

    #[test]
    fn force_present_is_noop() {
        let site = Site::new();
        let calls = Cell::new(0);
        let clock = || 1000u32;

        let mut result = site.with_clock(clock).every(1000, || {
            calls.set(calls.get() + 1);
            calls.get()
        });
        assert_eq!(result.get(), Some(&1));

        assert_eq!(*result.force(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn force_passes_elapsed_without_reset() {
        let site = Site::new();
        let clock = || 700u32;

        let mut result = site.with_clock(clock).every(1000, |dt: u32| dt);
        assert!(result.is_empty());
        assert_eq!(*result.force(), 700);
        assert!(result.is_present());
        assert_eq!(site.last(), 0);
    }

    #[test]
    fn take_clears() {
        let site = Site::new();
        let clock = || 5u32;

        let mut result = site.with_clock(clock).every(5u32, || 3u8);
        assert_eq!(result.take(), Some(3));
        assert!(result.is_empty());
        assert_eq!(result.take(), None);
    }

    #[test]
    fn unit_result_is_flag() {
        let site = Site::new();
        let clock = || 5u32;

        let result = site.with_clock(clock).every(5u32, || ());
        assert!(result.is_present());
        let value: Option<()> = result.into();
        assert_eq!(value, Some(()));
    }

    #[test]
    #[should_panic]
    fn empty_value_panics() {
        let site = Site::new();
        let clock = || 1u32;

        let result = site.with_clock(clock).every(5u32, || 3u8);
        let _ = result.value();
    }

    #[test]
    fn reset_through_result() {
        let site = Site::new();
        let clock = || 600u32;

        let result = site.with_clock(clock).every(1000, || ());
        assert!(result.is_empty());
        result.reset();
        assert_eq!(site.last(), 600);
    }
}
