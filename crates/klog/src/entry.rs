//! 日志条目结构
//!
//! 消息以定长数组存储，格式化时超出 [`MAX_LOG_MESSAGE_LENGTH`] 的部分被截断，
//! 截断位置总是落在 UTF-8 字符边界上。

use core::fmt::{self, Write};

use crate::config::MAX_LOG_MESSAGE_LENGTH;
use crate::level::LogLevel;

/// 单条日志
#[derive(Clone)]
pub struct LogEntry {
    seq: usize,
    level: LogLevel,
    len: usize,
    message: [u8; MAX_LOG_MESSAGE_LENGTH],
}

/// 写入定长数组，写满后静默丢弃剩余内容
struct MessageWriter<'a> {
    buf: &'a mut [u8; MAX_LOG_MESSAGE_LENGTH],
    len: usize,
}

impl Write for MessageWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MAX_LOG_MESSAGE_LENGTH - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

impl LogEntry {
    /// 由格式化参数构造条目
    pub fn from_args(level: LogLevel, seq: usize, args: fmt::Arguments) -> Self {
        let mut message = [0u8; MAX_LOG_MESSAGE_LENGTH];
        let mut writer = MessageWriter {
            buf: &mut message,
            len: 0,
        };
        let _ = writer.write_fmt(args);
        let len = writer.len;
        Self {
            seq,
            level,
            len,
            message,
        }
    }

    /// 日志序号（写入顺序，从 0 开始单调递增）
    pub fn seq(&self) -> usize {
        self.seq
    }

    /// 日志级别
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// 消息文本
    pub fn message(&self) -> &str {
        // 写入时只在字符边界截断，这里不会失败
        core::str::from_utf8(&self.message[..self.len]).unwrap_or("")
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("seq", &self.seq)
            .field("level", &self.level)
            .field("message", &self.message())
            .finish()
    }
}
