//! 文件抽象层 - 会话层接口
//!
//! 每次打开设备得到一个实现 [`File`] 的会话对象，以 `Arc<dyn File>` 形式
//! 存放在 [`crate::FDTable`] 中。会话通常是“有状态”的（例如维护当前 offset）。

use core::any::Any;

use crate::{FsError, UserBuffer};

/// lseek 的基准位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekWhence {
    /// 相对文件起始 (SEEK_SET)
    Set,
    /// 相对当前偏移 (SEEK_CUR)
    Current,
    /// 相对文件末尾 (SEEK_END)
    End,
}

/// 文件操作的统一接口
pub trait File: Send + Sync {
    /// 检查文件是否可读
    fn readable(&self) -> bool;

    /// 检查文件是否可写
    fn writable(&self) -> bool;

    /// 从当前偏移读取数据到调用者缓冲区，并推进偏移
    ///
    /// 请求长度由 `buf.len()` 给出；返回 0 表示到达末尾。
    fn read(&self, buf: &mut dyn UserBuffer) -> Result<usize, FsError>;

    /// 向文件写入数据，返回被接受的字节数
    fn write(&self, buf: &[u8]) -> Result<usize, FsError>;

    /// 设置文件偏移量（可选方法）
    fn lseek(&self, _offset: isize, _whence: SeekWhence) -> Result<usize, FsError> {
        Err(FsError::NotSupported)
    }

    /// 获取当前偏移量（可选方法）
    fn offset(&self) -> usize {
        0
    }

    /// 从指定位置读取数据，不移动当前偏移（可选方法，用于 pread64）
    fn read_at(&self, _offset: usize, _buf: &mut dyn UserBuffer) -> Result<usize, FsError> {
        Err(FsError::NotSupported)
    }

    /// 结束会话（最后一个引用关闭时由 [`crate::FDTable::close`] 调用）
    fn release(&self) -> Result<(), FsError> {
        Ok(())
    }

    /// 获取 Any trait 引用，用于安全的类型转换
    fn as_any(&self) -> &dyn Any;
}
