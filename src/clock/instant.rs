//! `std::time::Instant` based clock

use std::sync::OnceLock;
use std::time::Instant;

static START: OnceLock<Instant> = OnceLock::new();

pub fn now_ms() -> u32 {
    let start = START.get_or_init(Instant::now);
    start.elapsed().as_millis() as u32
}
