//! 字符设备驱动

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use vfs::{CharDevice, File, FsError};

use crate::{DeviceConfig, ProcessSource, Session};

/// 进程列表设备
///
/// 每次 [`CharDevice::open`] 生成一个独立的 [`Session`]，不限制并发打开数。
pub struct ProcessListDevice {
    source: Arc<dyn ProcessSource>,
    config: DeviceConfig,
    opens: AtomicUsize,
}

impl ProcessListDevice {
    /// 创建设备
    pub fn new(source: Arc<dyn ProcessSource>, config: DeviceConfig) -> Self {
        Self {
            source,
            config,
            opens: AtomicUsize::new(0),
        }
    }

    /// 打开一个会话，返回具体类型
    pub fn open_session(&self) -> Session {
        self.opens.fetch_add(1, Ordering::Relaxed);
        Session::open(&*self.source, self.config.buffer_capacity)
    }

    /// 累计打开次数
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }

    /// 设备配置
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
}

impl CharDevice for ProcessListDevice {
    fn open(&self, minor: u32) -> Result<Arc<dyn File>, FsError> {
        if minor != self.config.minor {
            return Err(FsError::NoDevice);
        }
        Ok(Arc::new(self.open_session()))
    }
}
