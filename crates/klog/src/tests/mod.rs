// Unit tests for LogCore internals, run with host `cargo test`.

extern crate alloc;

use crate::LogLevel;
use crate::log_core::LogCore;

/// Test-only logging helper targeting a local `LogCore`.
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, format_args!($($arg)*))
    };
}

mod basic;
mod filter;
mod format;
