//! 日志系统核心实现
//!
//! 将缓冲区与过滤状态封装到 [`LogCore`] 中，
//! 既可作为全局单例使用，也可以独立实例化用于测试。

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::buffer::LogBuffer;
use crate::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};
use crate::entry::LogEntry;
use crate::level::LogLevel;

/// 核心日志系统
///
/// 级别阈值使用原子变量保存；缓冲区内部由自旋锁保护，
/// 因此整个结构体可以在线程间共享。
pub struct LogCore {
    buffer: LogBuffer,
    /// 全局日志级别阈值（控制日志是否缓冲）
    global_level: AtomicU8,
    /// 控制台输出级别阈值（控制是否立即打印）
    console_level: AtomicU8,
}

impl LogCore {
    /// 使用默认日志级别创建实例，可用于 `static` 初始化
    ///
    /// ```rust
    /// use klog::LogCore;
    ///
    /// static GLOBAL_LOG: LogCore = LogCore::default();
    /// let _ = &GLOBAL_LOG;
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub const fn default() -> Self {
        Self {
            buffer: LogBuffer::new(),
            global_level: AtomicU8::new(DEFAULT_LOG_LEVEL as u8),
            console_level: AtomicU8::new(DEFAULT_CONSOLE_LEVEL as u8),
        }
    }

    /// 使用自定义日志级别创建实例
    ///
    /// ```rust
    /// use klog::{LogCore, LogLevel};
    ///
    /// let _test_log = LogCore::new(LogLevel::Debug, LogLevel::Warning);
    /// ```
    pub fn new(global_level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            buffer: LogBuffer::new(),
            global_level: AtomicU8::new(global_level as u8),
            console_level: AtomicU8::new(console_level as u8),
        }
    }

    /// 记录一条日志
    ///
    /// 1. 按全局级别过滤
    /// 2. 分配序号并写入缓冲区
    /// 3. 满足控制台级别时立即输出
    pub fn log(&self, level: LogLevel, args: fmt::Arguments) {
        if !self.is_level_enabled(level) {
            return;
        }

        let entry = self
            .buffer
            .push_with(|seq| LogEntry::from_args(level, seq, args));

        if self.is_console_level(level) {
            if let Some(output) = crate::get_log_output() {
                let mut line = format_log_entry(&entry);
                line.push('\n');
                output.write_str(&line);
            }
        }
    }

    /// 从缓冲区读取下一个日志条目
    pub fn read(&self) -> Option<LogEntry> {
        self.buffer.read()
    }

    /// 非破坏性读取：按序号 peek 日志条目，不移动读指针
    pub fn peek(&self, index: usize) -> Option<LogEntry> {
        self.buffer.peek(index)
    }

    /// 获取当前可读取的起始序号
    pub fn reader_index(&self) -> usize {
        self.buffer.reader_index()
    }

    /// 获取下一条日志将使用的序号
    pub fn writer_index(&self) -> usize {
        self.buffer.writer_index()
    }

    /// 返回未读日志条目的数量
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// 缓冲区是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 返回由于缓冲区溢出而丢弃的日志计数
    pub fn dropped_count(&self) -> usize {
        self.buffer.dropped_count()
    }

    /// 设置全局日志级别阈值，级别数值大于阈值的日志将被丢弃
    pub fn set_global_level(&self, level: LogLevel) {
        self.global_level.store(level as u8, Ordering::Release);
    }

    /// 获取当前全局日志级别
    pub fn global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Acquire))
    }

    /// 设置控制台输出级别阈值
    pub fn set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Release);
    }

    /// 获取当前控制台输出级别
    pub fn console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Acquire))
    }

    /// 检查日志级别是否启用 (全局过滤器)
    #[inline(always)]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.global_level.load(Ordering::Acquire)
    }

    #[inline(always)]
    fn is_console_level(&self, level: LogLevel) -> bool {
        level as u8 <= self.console_level.load(Ordering::Acquire)
    }
}

/// 格式化日志条目（带 ANSI 颜色和序号）
///
/// # 格式
/// ```text
/// <color_code>[LEVEL] [seq] message<reset>
/// ```
///
/// # 示例
/// ```text
/// \x1b[37m[INFO] [     3] chardrv: registered correctly with major number 254\x1b[0m
/// ```
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{}{} [{:6}] {}{}",
        entry.level().color_code(),
        entry.level().as_str(),
        entry.seq(),
        entry.message(),
        entry.level().reset_color_code()
    )
}
