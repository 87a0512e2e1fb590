//! Engine Logging
//!
//! In wasm builds messages go to the browser console.
//! In native builds (tests, tools) they are emitted as `tracing` events.
//!
//! Usage:
//! ```rust
//! use platformer_physics::{engine_log, engine_warn};
//!
//! engine_log!("scene loaded: {} obstacles", 12);
//! engine_warn!("platform {} has no stops", 3);
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// Send one message to the platform sink.
pub fn emit(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(message);
        match level {
            Level::Info => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match level {
            Level::Info => tracing::info!(target: "platformer_physics", "{}", message),
            Level::Warn => tracing::warn!(target: "platformer_physics", "{}", message),
        }
    }
}

/// Informational message: engine_log!("fmt", args..)
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        $crate::core::utils::log::emit(
            $crate::core::utils::log::Level::Info,
            &format!($($arg)*),
        );
    }};
}

/// Warning: engine_warn!("fmt", args..)
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::core::utils::log::emit(
            $crate::core::utils::log::Level::Warn,
            &format!($($arg)*),
        );
    }};
}
