//! VFS 错误类型
//!
//! 定义了与 POSIX 兼容的错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

use core::fmt;

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    // 查找相关
    /// 设备节点或设备类不存在 (-ENOENT)
    NotFound,
    /// 设备节点或设备类已存在 (-EEXIST)
    AlreadyExists,

    // 文件描述符相关
    /// 无效的文件描述符，或会话已释放 (-EBADF)
    BadFileDescriptor,
    /// 打开的文件过多 (-EMFILE)
    TooManyOpenFiles,

    // 参数相关
    /// 无效参数 (-EINVAL)
    InvalidArgument,
    /// 名称过长 (-ENAMETOOLONG)
    NameTooLong,

    // 设备相关
    /// 设备不存在 (-ENODEV)
    NoDevice,
    /// 设备号已被占用或无可用设备号 (-EBUSY)
    Busy,

    // 用户空间访问
    /// 调用者缓冲区无效 (-EFAULT)
    Fault,

    // 其他
    /// 操作不支持 (-ENOTSUP)
    NotSupported,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::BadFileDescriptor => -9,
            FsError::Fault => -14,
            FsError::Busy => -16,
            FsError::AlreadyExists => -17,
            FsError::NoDevice => -19,
            FsError::InvalidArgument => -22,
            FsError::TooManyOpenFiles => -24,
            FsError::NameTooLong => -36,
            FsError::NotSupported => -95,
        }
    }

    /// errno 的符号名
    pub fn name(&self) -> &'static str {
        match self {
            FsError::NotFound => "ENOENT",
            FsError::BadFileDescriptor => "EBADF",
            FsError::Fault => "EFAULT",
            FsError::Busy => "EBUSY",
            FsError::AlreadyExists => "EEXIST",
            FsError::NoDevice => "ENODEV",
            FsError::InvalidArgument => "EINVAL",
            FsError::TooManyOpenFiles => "EMFILE",
            FsError::NameTooLong => "ENAMETOOLONG",
            FsError::NotSupported => "ENOTSUP",
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.to_errno())
    }
}
