//! 字符设备文件层
//!
//! 此 crate 提供字符设备驱动与调用者之间的抽象，包括：
//!
//! - [`File`] trait - 打开后的文件会话接口（read/write/lseek/release）
//! - [`UserBuffer`] trait - 内核缓冲区到调用者缓冲区的字节搬运原语
//! - [`CharDevice`] / [`Registrar`] trait - 设备驱动与注册服务接口
//! - [`DeviceRegistry`] - 注册服务的内存实现（设备号、设备类、设备节点）
//! - [`FDTable`] - 文件描述符表
//! - 设备号编码与路径规范化

#![no_std]

extern crate alloc;

pub mod error;

mod chrdev;
mod devno;
mod fd_table;
mod file;
mod mode;
mod path;
mod registry;
mod uaccess;

// Re-export error
pub use error::FsError;

// Re-export chrdev
pub use chrdev::{CharDevice, ClassId, Registrar};

// Re-export devno
pub use devno::{
    CHRDEV_MAJOR_DYN_END, CHRDEV_MAJOR_DYN_START, CHRDEV_MAJOR_MAX, MINOR_MASK, chrdev_major,
    major, makedev, minor,
};

// Re-export fd_table
pub use fd_table::{DEFAULT_MAX_FDS, FDTable};

// Re-export file
pub use file::{File, SeekWhence};

// Re-export mode
pub use mode::FileMode;

// Re-export path
pub use path::{DEV_ROOT, dev_node_name, normalize_path};

// Re-export registry
pub use registry::{DEVICE_REGISTRY, DeviceNode, DeviceRegistry};

// Re-export uaccess
pub use uaccess::{UserBuffer, UserSliceMut};
