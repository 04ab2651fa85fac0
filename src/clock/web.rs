//! Web based clock

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = now)]
    fn performance_now() -> f64;
}

#[inline]
pub fn now_ms() -> u32 {
    (performance_now() as u64) as u32
}
