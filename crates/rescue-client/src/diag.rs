//! Browser console logging. Off-wasm the messages are formatted and dropped so
//! native test builds stay quiet.

#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

#[derive(Debug, Clone, Copy)]
pub(crate) enum Level {
    Log,
    Warn,
}

#[cfg(target_family = "wasm")]
pub(crate) fn emit(level: Level, msg: &str) {
    let value = wasm_bindgen::JsValue::from_str(msg);
    match level {
        Level::Log => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
    }
}

#[cfg(not(target_family = "wasm"))]
pub(crate) fn emit(_level: Level, _msg: &str) {}

macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::diag::emit($crate::diag::Level::Log, &format!($($arg)*))
    };
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::diag::emit($crate::diag::Level::Warn, &format!($($arg)*))
    };
}

#[allow(unused_imports)]
pub(crate) use {console_log, console_warn};
