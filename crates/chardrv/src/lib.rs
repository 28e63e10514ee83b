//! 只读进程列表字符设备
//!
//! 每次打开 `/dev/chardrv` 时，对当前进程表做一次快照，
//! 以 `"<name> <pid> \n"` 的文本格式写入会话私有的消息缓冲区；
//! 之后的 read 按会话偏移顺序读出该缓冲区，write 被接受但丢弃。
//!
//! # 组件
//!
//! - [`MessageBuffer`] - 固定容量的消息缓冲区，超出容量的内容被截断
//! - [`build_snapshot`] - 从 [`ProcessSource`] 生成快照文本
//! - [`transfer`] - 基于偏移的读取与写入丢弃
//! - [`Session`] - 一次打开对应的会话，实现 [`vfs::File`]
//! - [`ProcessListDevice`] - 字符设备驱动，实现 [`vfs::CharDevice`]
//! - [`ChardrvModule`] - 模块加载/卸载，按相反顺序回滚注册步骤

#![no_std]

extern crate alloc;

pub mod config;
pub mod transfer;

mod buffer;
mod device;
mod module;
mod session;
mod snapshot;

#[cfg(test)]
mod tests;

pub use buffer::MessageBuffer;
pub use config::DeviceConfig;
pub use device::ProcessListDevice;
pub use module::ChardrvModule;
pub use session::Session;
pub use snapshot::{ProcessRecord, ProcessSource, SnapshotStats, build_snapshot};
