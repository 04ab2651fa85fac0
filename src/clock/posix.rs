//! POSIX monotonic clock

use core::mem;

pub fn now_ms() -> u32 {
    let mut time = mem::MaybeUninit::<libc::timespec>::uninit();

    unsafe {
        os_assert!(libc::clock_gettime(libc::CLOCK_MONOTONIC, time.as_mut_ptr()) == 0);
    }

    let time = unsafe { time.assume_init() };
    let millis = (time.tv_sec as u64).wrapping_mul(1_000).wrapping_add(time.tv_nsec as u64 / 1_000_000);

    //Truncation is intended, timer arithmetic wraps.
    millis as u32
}
