//! 日志环形缓冲区
//!
//! 容量固定为 [`GLOBAL_LOG_BUFFER_SIZE`] 条。缓冲区满时丢弃最旧的条目
//! 并累加丢弃计数，与 printk 环形缓冲区覆盖旧日志的行为一致。

use alloc::collections::VecDeque;

use sync::SpinLock;

use crate::config::GLOBAL_LOG_BUFFER_SIZE;
use crate::entry::LogEntry;

struct RingState {
    entries: VecDeque<LogEntry>,
    /// 下一条日志的序号
    next_seq: usize,
    dropped: usize,
}

/// 日志环形缓冲区
pub(crate) struct LogBuffer {
    state: SpinLock<RingState>,
}

impl LogBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            state: SpinLock::new(RingState {
                entries: VecDeque::new(),
                next_seq: 0,
                dropped: 0,
            }),
        }
    }

    /// 分配序号并写入一条日志，返回写入的条目副本
    pub(crate) fn push_with(&self, make: impl FnOnce(usize) -> LogEntry) -> LogEntry {
        let mut state = self.state.lock();
        let entry = make(state.next_seq);
        state.next_seq += 1;
        if state.entries.len() == GLOBAL_LOG_BUFFER_SIZE {
            state.entries.pop_front();
            state.dropped += 1;
        }
        state.entries.push_back(entry.clone());
        entry
    }

    pub(crate) fn read(&self) -> Option<LogEntry> {
        self.state.lock().entries.pop_front()
    }

    pub(crate) fn peek(&self, index: usize) -> Option<LogEntry> {
        let state = self.state.lock();
        let reader = state.next_seq - state.entries.len();
        if index < reader {
            return None;
        }
        state.entries.get(index - reader).cloned()
    }

    pub(crate) fn reader_index(&self) -> usize {
        let state = self.state.lock();
        state.next_seq - state.entries.len()
    }

    pub(crate) fn writer_index(&self) -> usize {
        self.state.lock().next_seq
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub(crate) fn dropped_count(&self) -> usize {
        self.state.lock().dropped
    }
}
