//! 文件描述符表
//!
//! 为调用者提供整数描述符到打开会话的映射。
//!
//! 约定与语义：
//!
//! - `alloc()` 分配“最小可用 fd”
//! - `dup()` 共享底层 `Arc<dyn File>`（因此共享 offset）
//! - `close()` 移除槽位；当该槽位持有最后一个引用时调用 [`File::release`]

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use sync::SpinLock;

use crate::{File, FsError};

/// 默认的最大文件描述符数量
pub const DEFAULT_MAX_FDS: usize = 1024;

/// 文件描述符表
pub struct FDTable {
    /// 文件描述符数组
    files: SpinLock<Vec<Option<Arc<dyn File>>>>,
    /// 最大文件描述符数量
    max_fds: usize,
}

impl fmt::Debug for FDTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = self.files.lock();
        let used = files.iter().filter(|slot| slot.is_some()).count();
        f.debug_struct("FDTable")
            .field("max_fds", &self.max_fds)
            .field("slots", &files.len())
            .field("used", &used)
            .finish()
    }
}

impl FDTable {
    /// 创建新的文件描述符表
    pub fn new(max_fds: usize) -> Self {
        Self {
            files: SpinLock::new(Vec::new()),
            max_fds,
        }
    }

    /// 分配一个新的文件描述符
    pub fn alloc(&self, file: Arc<dyn File>) -> Result<usize, FsError> {
        let mut files = self.files.lock();

        // 查找最小可用 FD
        if let Some((fd, slot)) = files.iter_mut().enumerate().find(|(_, s)| s.is_none()) {
            *slot = Some(file);
            return Ok(fd);
        }

        // 如果没有空闲槽位，扩展数组
        let fd = files.len();
        if fd >= self.max_fds {
            return Err(FsError::TooManyOpenFiles);
        }

        files.push(Some(file));
        Ok(fd)
    }

    /// 在指定的 FD 位置安装文件，原有文件被替换
    pub fn install_at(&self, fd: usize, file: Arc<dyn File>) -> Result<(), FsError> {
        if fd >= self.max_fds {
            return Err(FsError::InvalidArgument);
        }

        let mut files = self.files.lock();
        if files.len() <= fd {
            files.resize_with(fd + 1, || None);
        }
        files[fd] = Some(file);
        Ok(())
    }

    /// 获取文件对象
    pub fn get(&self, fd: usize) -> Result<Arc<dyn File>, FsError> {
        let files = self.files.lock();
        files
            .get(fd)
            .and_then(|f| f.clone())
            .ok_or(FsError::BadFileDescriptor)
    }

    /// 复制文件描述符
    pub fn dup(&self, old_fd: usize) -> Result<usize, FsError> {
        let file = self.get(old_fd)?;
        self.alloc(file)
    }

    /// 关闭文件描述符
    ///
    /// 锁释放之后才调用 [`File::release`]，会话实现可以自由加锁。
    pub fn close(&self, fd: usize) -> Result<(), FsError> {
        let file = {
            let mut files = self.files.lock();
            files
                .get_mut(fd)
                .and_then(Option::take)
                .ok_or(FsError::BadFileDescriptor)?
        };

        if Arc::strong_count(&file) == 1 {
            file.release()?;
        }
        Ok(())
    }

    /// 当前已打开的描述符数量
    pub fn open_count(&self) -> usize {
        self.files.lock().iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for FDTable {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FDS)
    }
}
