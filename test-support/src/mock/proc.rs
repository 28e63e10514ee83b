//! 进程枚举的 Mock 实现

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Mock 进程表
///
/// 按插入顺序保存 `(name, pid)`，并统计被枚举消费的记录数，
/// 用于检查快照构建在缓冲区写满后是否停止消费。
pub struct MockProcessTable {
    entries: Vec<(String, u32)>,
    yielded: AtomicUsize,
    passes: AtomicUsize,
}

impl MockProcessTable {
    /// 从 `(name, pid)` 列表创建
    pub fn new(entries: &[(&str, u32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, pid)| (String::from(*name), *pid))
                .collect(),
            yielded: AtomicUsize::new(0),
            passes: AtomicUsize::new(0),
        }
    }

    /// 创建 `count` 个名为 `task_<i>`、pid 为 `i + 1` 的进程
    pub fn numbered(count: usize) -> Self {
        Self {
            entries: (0..count)
                .map(|i| (format!("task_{}", i), (i + 1) as u32))
                .collect(),
            yielded: AtomicUsize::new(0),
            passes: AtomicUsize::new(0),
        }
    }

    /// 所有条目
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// 开始一次新的枚举
    pub fn begin_pass(&self) {
        self.passes.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录一条被消费的条目
    pub fn note_yielded(&self) {
        self.yielded.fetch_add(1, Ordering::SeqCst);
    }

    /// 累计被消费的条目数
    pub fn yielded(&self) -> usize {
        self.yielded.load(Ordering::SeqCst)
    }

    /// 累计枚举次数
    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }
}
