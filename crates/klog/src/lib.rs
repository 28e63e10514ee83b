//! 内核日志子系统
//!
//! 提供类似 Linux printk 的日志缓冲区，并作为 [`log`] 门面的后端：
//! 工作区内各 crate 统一使用 `log::info!` 等宏记录日志，
//! 运行环境在启动时调用 [`init`] 把这些记录接入本 crate。
//!
//! # 组件
//!
//! - `buffer` - 固定容量的环形缓冲区，满时丢弃最旧条目并计数
//! - `config` - 配置常量（缓冲区大小、消息长度限制、默认级别）
//! - `entry` - 日志条目（定长消息存储，超长截断）
//! - `level` - printk 风格日志级别（Emergency 到 Debug）
//! - `log_core` - 核心实现 [`LogCore`]，可独立实例化用于测试
//! - `logger` - [`log::Log`] 桥接
//!
//! # 双输出策略
//!
//! 1. 达到全局级别阈值（默认 Info）的日志写入环形缓冲区，供事后读取；
//! 2. 达到控制台级别阈值（默认 Warning）的日志同时通过 [`LogOutput`] 立即输出。

#![no_std]

extern crate alloc;

mod buffer;
mod config;
mod entry;
mod level;
mod log_core;
mod logger;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL, GLOBAL_LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH,
};
pub use entry::LogEntry;
pub use level::LogLevel;
pub use log_core::{LogCore, format_log_entry};
pub use logger::init;

use core::sync::atomic::{AtomicPtr, Ordering};

/// 日志输出 trait
///
/// 实现此 trait 以提供日志的控制台输出能力。
/// 使用方需要在启动时通过 [`register_log_output`] 注册实现。
pub trait LogOutput: Send + Sync {
    /// 输出字符串到控制台
    fn write_str(&self, s: &str);
}

/// 存储 LogOutput trait object 的胖指针
struct LogOutputPtr {
    data: AtomicPtr<()>,
    vtable: AtomicPtr<()>,
}

impl LogOutputPtr {
    const fn new() -> Self {
        Self {
            data: AtomicPtr::new(core::ptr::null_mut()),
            vtable: AtomicPtr::new(core::ptr::null_mut()),
        }
    }
}

static LOG_OUTPUT: LogOutputPtr = LogOutputPtr::new();

/// 注册日志输出
///
/// # Safety
///
/// - output 必须具有 'static 生命周期
/// - 只能调用一次，且不能与日志调用并发
pub unsafe fn register_log_output(output: &'static dyn LogOutput) {
    let ptr: *const dyn LogOutput = output;
    let (data, vtable) = unsafe { core::mem::transmute::<_, (*mut (), *mut ())>(ptr) };
    LOG_OUTPUT.vtable.store(vtable, Ordering::Release);
    LOG_OUTPUT.data.store(data, Ordering::Release);
}

/// 获取已注册的日志输出
pub(crate) fn get_log_output() -> Option<&'static dyn LogOutput> {
    let data = LOG_OUTPUT.data.load(Ordering::Acquire);
    let vtable = LOG_OUTPUT.vtable.load(Ordering::Acquire);
    if data.is_null() || vtable.is_null() {
        return None;
    }
    // Safety: 指针由 register_log_output 设置，保证有效
    Some(unsafe {
        core::mem::transmute::<(*mut (), *mut ()), &'static dyn LogOutput>((data, vtable))
    })
}

// ========== 全局单例 ==========

/// 全局日志系统实例
static GLOBAL_LOG: LogCore = LogCore::default();

/// 核心日志实现（由 [`log::Log`] 桥接调用）
#[doc(hidden)]
pub fn log_impl(level: LogLevel, args: core::fmt::Arguments) {
    GLOBAL_LOG.log(level, args);
}

/// 检查日志级别是否启用
pub fn is_level_enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.is_level_enabled(level)
}

/// 从缓冲区读取下一个日志条目
pub fn read_log() -> Option<LogEntry> {
    GLOBAL_LOG.read()
}

/// 非破坏性读取：按序号 peek 日志条目，不移动读指针
pub fn peek_log(index: usize) -> Option<LogEntry> {
    GLOBAL_LOG.peek(index)
}

/// 获取当前可读取的起始序号
pub fn log_reader_index() -> usize {
    GLOBAL_LOG.reader_index()
}

/// 获取下一条日志将使用的序号
pub fn log_writer_index() -> usize {
    GLOBAL_LOG.writer_index()
}

/// 返回未读日志条目的数量
pub fn log_len() -> usize {
    GLOBAL_LOG.len()
}

/// 返回已丢弃日志的计数
pub fn log_dropped_count() -> usize {
    GLOBAL_LOG.dropped_count()
}

/// 设置全局日志级别阈值
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG.set_global_level(level);
}

/// 获取当前全局日志级别
pub fn get_global_level() -> LogLevel {
    GLOBAL_LOG.global_level()
}

/// 设置控制台输出级别阈值
pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG.set_console_level(level);
}

/// 获取当前控制台输出级别
pub fn get_console_level() -> LogLevel {
    GLOBAL_LOG.console_level()
}
