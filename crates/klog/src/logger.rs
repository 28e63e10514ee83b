//! [`log`] 门面桥接
//!
//! 把 `log::info!` 等宏产生的记录转交给全局 [`crate::LogCore`]。

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::level::LogLevel;

struct KernelLogger;

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        crate::is_level_enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            crate::log_impl(LogLevel::from(record.level()), *record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: KernelLogger = KernelLogger;

/// 将 klog 安装为 [`log`] 门面的后端
///
/// 级别过滤由 klog 自身的全局阈值负责，因此门面的最大级别设为 `Trace`。
/// 重复调用返回错误。
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
