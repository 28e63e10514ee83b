//! 设备号编码与字符设备 major 号约定
//!
//! 编码方式与 glibc `makedev` 一致：minor 低 8 位位于最低字节，major 低 12 位紧随其后，
//! 两者其余的高位依次放在更高的位段，因此小设备号与传统 16 位编码相同。

/// 标准字符设备 major 号
pub mod chrdev_major {
    /// /dev/null, /dev/zero 等
    pub const MEM: u32 = 1;
    /// /dev/tty*, /dev/ttyS*
    pub const TTY: u32 = 4;
    /// /dev/console
    pub const CONSOLE: u32 = 5;
    /// /dev/misc/*
    pub const MISC: u32 = 10;
}

/// 动态分配 major 号时的起点（从高往低扫描）
pub const CHRDEV_MAJOR_DYN_START: u32 = 254;

/// 动态分配 major 号的下界（含）
pub const CHRDEV_MAJOR_DYN_END: u32 = 234;

/// major 号上限（不含）
pub const CHRDEV_MAJOR_MAX: u32 = 512;

/// minor 号可用位
pub const MINOR_MASK: u32 = (1 << 20) - 1;

/// 由 major/minor 组合设备号
pub const fn makedev(major: u32, minor: u32) -> u64 {
    let major = major as u64;
    let minor = minor as u64;
    ((major & 0xffff_f000) << 32)
        | ((major & 0x0000_0fff) << 8)
        | ((minor & 0xffff_ff00) << 12)
        | (minor & 0x0000_00ff)
}

/// 取设备号的 major 部分
pub const fn major(dev: u64) -> u32 {
    (((dev >> 32) & 0xffff_f000) | ((dev >> 8) & 0x0000_0fff)) as u32
}

/// 取设备号的 minor 部分
pub const fn minor(dev: u64) -> u32 {
    (((dev >> 12) & 0xffff_ff00) | (dev & 0x0000_00ff)) as u32
}
