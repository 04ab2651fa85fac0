///Assertion macro, which panics with last OS error
#[allow(unused_macros)]
macro_rules! os_assert {
    ($cond:expr) => ({
        if !($cond) {
            panic!("Assertion '{}' failed. OS error: {}", stringify!($cond), error_code::SystemError::last());
        }
    })
}
