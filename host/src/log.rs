//! 宿主环境的日志接入
//!
//! 控制台级别的日志写到 stderr，stdout 只输出设备内容。

use std::io::Write;

use klog::{LogLevel, LogOutput};

/// 写到 stderr 的日志输出
struct StderrOutput;

impl LogOutput for StderrOutput {
    fn write_str(&self, s: &str) {
        let _ = std::io::stderr().write_all(s.as_bytes());
    }
}

static STDERR_OUTPUT: StderrOutput = StderrOutput;

/// 初始化日志系统
///
/// `CHARDRV_LOG` 环境变量（0-7）设置控制台级别，默认只输出警告及以上。
pub fn init() {
    // Safety: 静态实例，且在任何日志调用之前注册
    unsafe { klog::register_log_output(&STDERR_OUTPUT) };
    if klog::init().is_err() {
        return;
    }

    let level = std::env::var("CHARDRV_LOG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .map(LogLevel::from_u8);
    if let Some(level) = level {
        klog::set_console_level(level);
        if level > klog::get_global_level() {
            klog::set_global_level(level);
        }
    }
}
