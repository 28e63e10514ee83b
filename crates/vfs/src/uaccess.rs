//! 用户缓冲区访问
//!
//! [`UserBuffer`] 抽象了“把内核持有的字节搬运到调用者提供的缓冲区”这一步。
//! 搬运是全有或全无的：要么整段复制成功，要么返回 [`FsError::Fault`]
//! 且调用者缓冲区不被修改。

use crate::FsError;

/// 调用者提供的输出缓冲区
pub trait UserBuffer {
    /// 调用者请求的字节数
    fn len(&self) -> usize;

    /// 请求长度是否为 0
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 把 `src` 复制到缓冲区起始处
    ///
    /// 缓冲区无效或 `src` 超出请求长度时返回 [`FsError::Fault`]，不产生部分写入。
    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError>;
}

/// 已校验过的可写内存切片
///
/// 内核已经映射并校验过的缓冲区（或宿主进程中的普通切片），复制不会失败，
/// 除非 `src` 超出切片长度。
pub struct UserSliceMut<'a> {
    buf: &'a mut [u8],
}

impl<'a> UserSliceMut<'a> {
    /// 包装一段可写切片
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }
}

impl<'a> From<&'a mut [u8]> for UserSliceMut<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        Self::new(buf)
    }
}

impl UserBuffer for UserSliceMut<'_> {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError> {
        let dst = self.buf.get_mut(..src.len()).ok_or(FsError::Fault)?;
        dst.copy_from_slice(src);
        Ok(())
    }
}
