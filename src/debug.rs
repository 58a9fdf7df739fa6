/// Debug output control for the counter demo
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Name of the environment variable that turns tracing on
pub const DEBUG_ENV_VAR: &str = "COUNTER_DEMO_DEBUG";

/// Global flag to control debug output
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Ensures environment variable check happens only once
static INIT: Once = Once::new();

fn init_from_env() {
    INIT.call_once(|| {
        if std::env::var_os(DEBUG_ENV_VAR).is_some() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
}

/// Enable debug output
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

/// Check if debug output is enabled
pub fn is_debug_enabled() -> bool {
    init_from_env();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print a trace line to stderr only if debug mode is enabled.
/// Never touches stdout, so the demo output stays exact.
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}
