//! 模块加载与卸载
//!
//! 加载依次执行：申请 major 号、创建设备类、创建设备节点。
//! 任一步失败时，按相反顺序撤销已完成的步骤后返回错误；
//! 卸载（显式 [`ChardrvModule::exit`] 或 drop）同样按相反顺序撤销。

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use bitflags::bitflags;

use vfs::{ClassId, DEV_ROOT, FsError, Registrar, makedev};

use crate::{DeviceConfig, ProcessListDevice, ProcessSource};

bitflags! {
    /// 已完成的注册步骤
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct RegStage: u8 {
        const CHRDEV = 1 << 0;
        const CLASS = 1 << 1;
        const NODE = 1 << 2;
    }
}

/// 已加载的模块
///
/// 持有注册服务的引用以及已完成步骤的记录。
pub struct ChardrvModule<'r> {
    registrar: &'r dyn Registrar,
    config: DeviceConfig,
    device: Arc<ProcessListDevice>,
    major: u32,
    class: Option<ClassId>,
    stages: RegStage,
}

impl<'r> ChardrvModule<'r> {
    /// 加载模块
    pub fn init(
        registrar: &'r dyn Registrar,
        source: Arc<dyn ProcessSource>,
        config: DeviceConfig,
    ) -> Result<Self, FsError> {
        let mut module = Self {
            registrar,
            config,
            device: Arc::new(ProcessListDevice::new(source, config)),
            major: 0,
            class: None,
            stages: RegStage::empty(),
        };

        if let Err(err) = module.register() {
            module.teardown();
            return Err(err);
        }
        Ok(module)
    }

    fn register(&mut self) -> Result<(), FsError> {
        let name = self.config.device_name;

        self.major = self
            .registrar
            .register_chrdev(0, name, self.device.clone())
            .inspect_err(|err| log::error!("chardrv: failed to register a major number: {}", err))?;
        self.stages |= RegStage::CHRDEV;
        log::info!(
            "chardrv: registered correctly with major number {}",
            self.major
        );

        let class = self
            .registrar
            .class_create(self.config.class_name)
            .inspect_err(|err| log::error!("chardrv: failed to register device class: {}", err))?;
        self.class = Some(class);
        self.stages |= RegStage::CLASS;
        log::info!("chardrv: device class registered correctly");

        self.registrar
            .device_create(class, self.dev(), name, self.config.mode)
            .inspect_err(|err| log::error!("chardrv: failed to create the device: {}", err))?;
        self.stages |= RegStage::NODE;
        log::info!("chardrv: device created correctly at {}", self.device_path());
        Ok(())
    }

    /// 按相反顺序撤销已完成的步骤
    fn teardown(&mut self) {
        if let Some(class) = self.class {
            if self.stages.contains(RegStage::NODE) {
                self.registrar.device_destroy(class, self.dev());
            }
            if self.stages.contains(RegStage::CLASS) {
                self.registrar.class_destroy(class);
            }
        }
        if self.stages.contains(RegStage::CHRDEV) {
            self.registrar
                .unregister_chrdev(self.major, self.config.device_name);
        }
        self.stages = RegStage::empty();
        self.class = None;
    }

    /// 卸载模块
    pub fn exit(self) {
        drop(self);
    }

    /// 分配到的 major 号
    pub fn major(&self) -> u32 {
        self.major
    }

    /// 设备号
    pub fn dev(&self) -> u64 {
        makedev(self.major, self.config.minor)
    }

    /// 设备类
    pub fn class(&self) -> Option<ClassId> {
        self.class
    }

    /// 设备节点路径
    pub fn device_path(&self) -> String {
        format!("{}/{}", DEV_ROOT, self.config.device_name)
    }

    /// 设备驱动
    pub fn device(&self) -> &Arc<ProcessListDevice> {
        &self.device
    }
}

impl Drop for ChardrvModule<'_> {
    fn drop(&mut self) {
        if self.stages.is_empty() {
            return;
        }
        self.teardown();
        log::info!("chardrv: goodbye");
    }
}
