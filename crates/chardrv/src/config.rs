//! 设备配置常量

use vfs::FileMode;

/// 设备节点名（出现在 `/dev/chardrv`）
pub const DEVICE_NAME: &str = "chardrv";

/// 设备类名
pub const CLASS_NAME: &str = "chardrv";

/// 消息缓冲区容量（字节）
pub const BUF_LEN: usize = 8000;

/// 设备节点权限（r--r--r--）
pub const DEVICE_MODE: FileMode = FileMode::READ_ALL;

/// 设备节点的 minor 号
pub const DEVICE_MINOR: u32 = 0;

/// 设备实例配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// 驱动与设备节点名
    pub device_name: &'static str,
    /// 设备类名
    pub class_name: &'static str,
    /// 每个会话的消息缓冲区容量
    pub buffer_capacity: usize,
    /// 设备节点权限
    pub mode: FileMode,
    /// 设备节点的 minor 号
    pub minor: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_name: DEVICE_NAME,
            class_name: CLASS_NAME,
            buffer_capacity: BUF_LEN,
            mode: DEVICE_MODE,
            minor: DEVICE_MINOR,
        }
    }
}

impl DeviceConfig {
    /// 使用指定缓冲区容量，其余保持默认
    pub fn with_capacity(buffer_capacity: usize) -> Self {
        Self {
            buffer_capacity,
            ..Self::default()
        }
    }
}
