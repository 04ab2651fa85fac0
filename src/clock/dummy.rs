//! Dummy clock

pub fn now_ms() -> u32 {
    unimplemented!("No platform clock is available, supply one via `clock = ...` or `Site::with_clock`");
}
