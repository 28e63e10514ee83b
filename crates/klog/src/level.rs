//! 日志级别定义
//!
//! 与 Linux printk 的 `KERN_*` 级别一一对应，数值越小越紧急。

/// 日志级别
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// 系统不可用 (KERN_EMERG)
    Emergency = 0,
    /// 必须立即处理 (KERN_ALERT)
    Alert = 1,
    /// 严重情况 (KERN_CRIT)
    Critical = 2,
    /// 错误 (KERN_ERR)
    Error = 3,
    /// 警告 (KERN_WARNING)
    Warning = 4,
    /// 正常但值得注意 (KERN_NOTICE)
    Notice = 5,
    /// 信息 (KERN_INFO)
    Info = 6,
    /// 调试 (KERN_DEBUG)
    Debug = 7,
}

impl LogLevel {
    /// 从数值转换，越界值视为 Debug
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Emergency,
            1 => LogLevel::Alert,
            2 => LogLevel::Critical,
            3 => LogLevel::Error,
            4 => LogLevel::Warning,
            5 => LogLevel::Notice,
            6 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// 级别标签
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Emergency => "[EMERG]",
            LogLevel::Alert => "[ALERT]",
            LogLevel::Critical => "[CRIT]",
            LogLevel::Error => "[ERR]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Notice => "[NOTICE]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
        }
    }

    /// ANSI 颜色前缀
    pub const fn color_code(self) -> &'static str {
        match self {
            LogLevel::Emergency | LogLevel::Alert | LogLevel::Critical => "\x1b[1;31m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warning => "\x1b[93m",
            LogLevel::Notice => "\x1b[32m",
            LogLevel::Info => "\x1b[37m",
            LogLevel::Debug => "\x1b[90m",
        }
    }

    /// ANSI 颜色复位
    pub const fn reset_color_code(self) -> &'static str {
        "\x1b[0m"
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}
