//!Interval module

use core::time;

///Describes value which can be used as interval between firings.
///
///Integers are taken as raw clock ticks (milliseconds for [Monotonic](clock/struct.Monotonic.html)).
///Negative signed values are treated as zero.
///
///`Duration` is converted to milliseconds, saturating at `u32::MAX`.
pub trait Interval {
    ///Returns interval in clock ticks.
    fn ticks(self) -> u32;
}

impl Interval for u32 {
    #[inline(always)]
    fn ticks(self) -> u32 {
        self
    }
}

impl Interval for u16 {
    #[inline(always)]
    fn ticks(self) -> u32 {
        self.into()
    }
}

impl Interval for u8 {
    #[inline(always)]
    fn ticks(self) -> u32 {
        self.into()
    }
}

impl Interval for u64 {
    #[inline]
    fn ticks(self) -> u32 {
        if self > u64::from(u32::max_value()) {
            u32::max_value()
        } else {
            self as u32
        }
    }
}

impl Interval for usize {
    #[inline]
    fn ticks(self) -> u32 {
        (self as u64).ticks()
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {$(
        impl Interval for $ty {
            #[inline]
            fn ticks(self) -> u32 {
                if self < 0 {
                    0
                } else {
                    (self as u64).ticks()
                }
            }
        }
    )*};
}

//Unsuffixed literals fall back to i32
impl_signed!(i8, i16, i32, i64, isize);

impl Interval for time::Duration {
    #[inline]
    fn ticks(self) -> u32 {
        match self.as_millis() {
            millis if millis > u128::from(u32::max_value()) => u32::max_value(),
            millis => millis as u32,
        }
    }
}
