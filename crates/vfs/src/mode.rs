//! 设备节点权限位

use bitflags::bitflags;

bitflags! {
    /// 文件权限位（与 `st_mode` 低 9 位一致）
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileMode: u32 {
        /// 所有者可读
        const S_IRUSR = 0o400;
        /// 所有者可写
        const S_IWUSR = 0o200;
        /// 所有者可执行
        const S_IXUSR = 0o100;
        /// 同组可读
        const S_IRGRP = 0o040;
        /// 同组可写
        const S_IWGRP = 0o020;
        /// 同组可执行
        const S_IXGRP = 0o010;
        /// 其他用户可读
        const S_IROTH = 0o004;
        /// 其他用户可写
        const S_IWOTH = 0o002;
        /// 其他用户可执行
        const S_IXOTH = 0o001;

        /// r--r--r--
        const READ_ALL = Self::S_IRUSR.bits() | Self::S_IRGRP.bits() | Self::S_IROTH.bits();
        /// rw-rw-rw-
        const RW_ALL = Self::READ_ALL.bits()
            | Self::S_IWUSR.bits()
            | Self::S_IWGRP.bits()
            | Self::S_IWOTH.bits();
    }
}

impl FileMode {
    /// 是否有任何写权限位
    pub fn any_writable(&self) -> bool {
        self.intersects(FileMode::S_IWUSR | FileMode::S_IWGRP | FileMode::S_IWOTH)
    }
}
