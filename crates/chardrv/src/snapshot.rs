//! 进程表快照
//!
//! [`ProcessSource`] 按枚举顺序（不排序）给出当前运行的进程；
//! [`build_snapshot`] 把每条记录格式化为 `"<name> <pid> \n"` 追加到缓冲区，
//! 一旦发生截断就停止消费，剩余记录直接丢弃。

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::Write;

use crate::MessageBuffer;

/// 一条进程记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// 进程名
    pub name: String,
    /// 进程号
    pub pid: u32,
}

impl ProcessRecord {
    /// 创建记录
    pub fn new(name: impl Into<String>, pid: u32) -> Self {
        Self {
            name: name.into(),
            pid,
        }
    }
}

/// 进程枚举接口
pub trait ProcessSource: Send + Sync {
    /// 返回当前进程的迭代器，每次快照只遍历一次
    fn records(&self) -> Box<dyn Iterator<Item = ProcessRecord> + '_>;
}

/// 快照统计，仅用于调试日志
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotStats {
    /// 完整写入的记录数
    pub records: usize,
    /// 写入的字节数
    pub bytes: usize,
    /// 是否发生截断
    pub truncated: bool,
}

/// 把进程表快照追加到 `buffer`
pub fn build_snapshot(buffer: &mut MessageBuffer, source: &dyn ProcessSource) -> SnapshotStats {
    let mut stats = SnapshotStats::default();
    let mut line = String::new();

    for record in source.records() {
        line.clear();
        // 向 String 写入不会失败
        let _ = writeln!(line, "{} {} ", record.name, record.pid);

        let written = buffer.append(line.as_bytes());
        stats.bytes += written;
        if written < line.len() {
            stats.truncated = true;
            break;
        }
        stats.records += 1;
    }

    stats
}
