//! 消息缓冲区

use alloc::boxed::Box;
use alloc::vec;

/// 固定容量的消息缓冲区
///
/// 只记录有效长度；`len() <= capacity()` 恒成立，任何写入都不会越过容量。
pub struct MessageBuffer {
    storage: Box<[u8]>,
    len: usize,
}

impl MessageBuffer {
    /// 创建指定容量的空缓冲区
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// 清空有效内容
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// 追加文本，返回实际写入的字节数
    ///
    /// 剩余空间不足时只写入能容纳的前缀；返回值小于 `text.len()` 即表示发生截断。
    pub fn append(&mut self, text: &[u8]) -> usize {
        let count = text.len().min(self.remaining());
        self.storage[self.len..self.len + count].copy_from_slice(&text[..count]);
        self.len += count;
        count
    }

    /// 缓冲区容量
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// 有效长度
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否没有有效内容
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 是否已写满
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// 剩余可写字节数
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// 有效内容
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }
}

impl core::fmt::Debug for MessageBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .finish()
    }
}
