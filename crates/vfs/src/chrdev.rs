//! 字符设备驱动与注册服务接口
//!
//! 驱动实现 [`CharDevice`]，在模块加载时通过 [`Registrar`] 申请设备号、
//! 创建设备类和设备节点；卸载时按相反顺序撤销。

use alloc::sync::Arc;

use crate::{File, FileMode, FsError};

/// 设备类句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClassId(pub u32);

/// 字符设备驱动接口
pub trait CharDevice: Send + Sync {
    /// 打开一个会话
    fn open(&self, minor: u32) -> Result<Arc<dyn File>, FsError>;
}

/// 设备注册服务
///
/// 各 `*_create` / `register_*` 成功后，调用者负责在卸载时调用对应的撤销方法。
/// 撤销方法对不存在的对象静默忽略。
pub trait Registrar: Send + Sync {
    /// 注册字符设备驱动，`major == 0` 表示动态分配，返回实际 major 号
    fn register_chrdev(
        &self,
        major: u32,
        name: &str,
        driver: Arc<dyn CharDevice>,
    ) -> Result<u32, FsError>;

    /// 注销字符设备驱动
    fn unregister_chrdev(&self, major: u32, name: &str);

    /// 创建设备类
    fn class_create(&self, name: &str) -> Result<ClassId, FsError>;

    /// 销毁设备类
    fn class_destroy(&self, class: ClassId);

    /// 在设备类下创建设备节点（出现在 `/dev/<name>`）
    fn device_create(
        &self,
        class: ClassId,
        dev: u64,
        name: &str,
        mode: FileMode,
    ) -> Result<(), FsError>;

    /// 销毁设备节点
    fn device_destroy(&self, class: ClassId, dev: u64);
}
