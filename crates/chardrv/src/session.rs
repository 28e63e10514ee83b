//! 设备会话
//!
//! 每次打开对应一个 [`Session`]：打开时分配新的缓冲区并生成快照，
//! 会话拥有自己的偏移，关闭时缓冲区与偏移一并丢弃。
//! 不同会话互不影响；同一会话可被多个线程共享，状态由自旋锁保护。

use alloc::vec::Vec;
use core::any::Any;

use sync::SpinLock;
use vfs::{File, FsError, SeekWhence, UserBuffer};

use crate::{MessageBuffer, ProcessSource, build_snapshot, transfer};

struct SessionState {
    buffer: MessageBuffer,
    cursor: usize,
    released: bool,
}

/// 一次打开的会话
pub struct Session {
    state: SpinLock<SessionState>,
}

impl Session {
    /// 打开会话：分配容量为 `capacity` 的缓冲区并填充进程表快照
    pub fn open(source: &dyn ProcessSource, capacity: usize) -> Self {
        let mut buffer = MessageBuffer::new(capacity);
        let stats = build_snapshot(&mut buffer, source);
        log::debug!(
            "chardrv: snapshot {} records, {} bytes{}",
            stats.records,
            stats.bytes,
            if stats.truncated { " (truncated)" } else { "" }
        );

        Self {
            state: SpinLock::new(SessionState {
                buffer,
                cursor: 0,
                released: false,
            }),
        }
    }

    /// 快照有效长度
    pub fn valid_length(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// 快照内容的副本
    pub fn contents(&self) -> Vec<u8> {
        self.state.lock().buffer.as_bytes().to_vec()
    }

    /// 会话是否已关闭
    pub fn is_released(&self) -> bool {
        self.state.lock().released
    }
}

impl File for Session {
    fn readable(&self) -> bool {
        true
    }

    /// 只读设备；`write` 仍按约定接受并丢弃数据
    fn writable(&self) -> bool {
        false
    }

    fn read(&self, buf: &mut dyn UserBuffer) -> Result<usize, FsError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if state.released {
            return Err(FsError::BadFileDescriptor);
        }
        transfer::read(&state.buffer, &mut state.cursor, buf)
    }

    fn write(&self, buf: &[u8]) -> Result<usize, FsError> {
        if self.state.lock().released {
            return Err(FsError::BadFileDescriptor);
        }
        Ok(transfer::write_discard(buf))
    }

    fn lseek(&self, offset: isize, whence: SeekWhence) -> Result<usize, FsError> {
        let mut state = self.state.lock();
        if state.released {
            return Err(FsError::BadFileDescriptor);
        }

        let valid = state.buffer.len();
        let base = match whence {
            SeekWhence::Set => 0,
            SeekWhence::Current => state.cursor,
            SeekWhence::End => valid,
        };
        let target = base
            .checked_add_signed(offset)
            .filter(|&pos| pos <= valid)
            .ok_or(FsError::InvalidArgument)?;

        state.cursor = target;
        Ok(target)
    }

    fn offset(&self) -> usize {
        self.state.lock().cursor
    }

    fn read_at(&self, offset: usize, buf: &mut dyn UserBuffer) -> Result<usize, FsError> {
        let state = self.state.lock();
        if state.released {
            return Err(FsError::BadFileDescriptor);
        }
        transfer::read_at(&state.buffer, offset, buf)
    }

    fn release(&self) -> Result<(), FsError> {
        let mut state = self.state.lock();
        if state.released {
            return Err(FsError::BadFileDescriptor);
        }
        state.released = true;
        state.cursor = 0;
        state.buffer = MessageBuffer::new(0);
        drop(state);

        log::info!("chardrv: device successfully closed");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
