//! 设备注册服务的内存实现
//!
//! [`DeviceRegistry`] 维护三张表：
//!
//! - 字符设备驱动：major 号 -> (名称, 驱动)
//! - 设备类：[`ClassId`] -> 名称
//! - 设备节点：节点名 -> [`DeviceNode`]
//!
//! 通过 [`DeviceRegistry::open`] 按 `/dev/<name>` 路径打开设备。

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use lazy_static::lazy_static;
use sync::SpinLock;

use crate::{
    CHRDEV_MAJOR_DYN_END, CHRDEV_MAJOR_DYN_START, CHRDEV_MAJOR_MAX, CharDevice, ClassId, File,
    FileMode, FsError, Registrar, dev_node_name, major, minor,
};

/// 已创建的设备节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceNode {
    /// 所属设备类
    pub class: ClassId,
    /// 设备号
    pub dev: u64,
    /// 访问权限
    pub mode: FileMode,
}

struct ChrdevEntry {
    name: String,
    driver: Arc<dyn CharDevice>,
}

struct RegistryState {
    chrdevs: BTreeMap<u32, ChrdevEntry>,
    classes: BTreeMap<ClassId, String>,
    nodes: BTreeMap<String, DeviceNode>,
    next_class: u32,
}

/// 设备注册表
pub struct DeviceRegistry {
    state: SpinLock<RegistryState>,
}

lazy_static! {
    /// 全局设备注册表
    pub static ref DEVICE_REGISTRY: DeviceRegistry = DeviceRegistry::new();
}

impl DeviceRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            state: SpinLock::new(RegistryState {
                chrdevs: BTreeMap::new(),
                classes: BTreeMap::new(),
                nodes: BTreeMap::new(),
                next_class: 1,
            }),
        }
    }

    /// 按路径打开设备节点
    ///
    /// 驱动的 `open` 在注册表锁之外调用。
    pub fn open(&self, path: &str) -> Result<Arc<dyn File>, FsError> {
        let name = dev_node_name(path)?;
        let (driver, dev) = {
            let state = self.state.lock();
            let node = state.nodes.get(&name).ok_or(FsError::NotFound)?;
            let entry = state
                .chrdevs
                .get(&major(node.dev))
                .ok_or(FsError::NoDevice)?;
            (entry.driver.clone(), node.dev)
        };
        driver.open(minor(dev))
    }

    /// 查询设备节点
    pub fn node(&self, name: &str) -> Option<DeviceNode> {
        self.state.lock().nodes.get(name).cloned()
    }

    /// 查询 major 号对应的驱动名称
    pub fn chrdev_name(&self, major: u32) -> Option<String> {
        self.state
            .lock()
            .chrdevs
            .get(&major)
            .map(|entry| entry.name.clone())
    }

    /// 查询设备类名称
    pub fn class_name(&self, class: ClassId) -> Option<String> {
        self.state.lock().classes.get(&class).cloned()
    }

    /// 已注册的 major 号（升序）
    pub fn majors(&self) -> Vec<u32> {
        self.state.lock().chrdevs.keys().copied().collect()
    }

    /// 注册表中是否没有任何对象
    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        state.chrdevs.is_empty() && state.classes.is_empty() && state.nodes.is_empty()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn check_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name.contains('/') {
        return Err(FsError::InvalidArgument);
    }
    Ok(())
}

impl Registrar for DeviceRegistry {
    fn register_chrdev(
        &self,
        major: u32,
        name: &str,
        driver: Arc<dyn CharDevice>,
    ) -> Result<u32, FsError> {
        check_name(name)?;
        if major >= CHRDEV_MAJOR_MAX {
            return Err(FsError::InvalidArgument);
        }

        let mut state = self.state.lock();
        let major = if major == 0 {
            (CHRDEV_MAJOR_DYN_END..=CHRDEV_MAJOR_DYN_START)
                .rev()
                .find(|m| !state.chrdevs.contains_key(m))
                .ok_or_else(|| {
                    log::warn!("register_chrdev: no free dynamic major for {}", name);
                    FsError::Busy
                })?
        } else if state.chrdevs.contains_key(&major) {
            return Err(FsError::Busy);
        } else {
            major
        };

        state.chrdevs.insert(
            major,
            ChrdevEntry {
                name: String::from(name),
                driver,
            },
        );
        log::debug!("register_chrdev: {} -> major {}", name, major);
        Ok(major)
    }

    fn unregister_chrdev(&self, major: u32, name: &str) {
        let mut state = self.state.lock();
        match state.chrdevs.get(&major) {
            Some(entry) if entry.name == name => {
                state.chrdevs.remove(&major);
                log::debug!("unregister_chrdev: {} (major {})", name, major);
            }
            Some(entry) => {
                log::warn!(
                    "unregister_chrdev: major {} belongs to {}, not {}",
                    major,
                    entry.name,
                    name
                );
            }
            None => {}
        }
    }

    fn class_create(&self, name: &str) -> Result<ClassId, FsError> {
        check_name(name)?;
        let mut state = self.state.lock();
        if state.classes.values().any(|existing| existing == name) {
            return Err(FsError::AlreadyExists);
        }

        let id = ClassId(state.next_class);
        state.next_class += 1;
        state.classes.insert(id, String::from(name));
        log::debug!("class_create: {} -> {:?}", name, id);
        Ok(id)
    }

    fn class_destroy(&self, class: ClassId) {
        let mut state = self.state.lock();
        if let Some(name) = state.classes.remove(&class) {
            // 类销毁时一并移除其残留节点
            state.nodes.retain(|_, node| node.class != class);
            log::debug!("class_destroy: {}", name);
        }
    }

    fn device_create(
        &self,
        class: ClassId,
        dev: u64,
        name: &str,
        mode: FileMode,
    ) -> Result<(), FsError> {
        check_name(name)?;
        let mut state = self.state.lock();
        if !state.classes.contains_key(&class) {
            return Err(FsError::NotFound);
        }
        if state.nodes.contains_key(name) {
            return Err(FsError::AlreadyExists);
        }

        state
            .nodes
            .insert(String::from(name), DeviceNode { class, dev, mode });
        log::debug!(
            "device_create: /dev/{} ({}:{}, {:o})",
            name,
            major(dev),
            minor(dev),
            mode.bits()
        );
        Ok(())
    }

    fn device_destroy(&self, class: ClassId, dev: u64) {
        let mut state = self.state.lock();
        state
            .nodes
            .retain(|_, node| !(node.class == class && node.dev == dev));
    }
}
