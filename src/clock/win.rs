//! Windows tick counter

#[inline]
pub fn now_ms() -> u32 {
    //Wraps every 49.7 days, same as our timestamps.
    unsafe {
        winapi::um::sysinfoapi::GetTickCount()
    }
}
