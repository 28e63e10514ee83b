//! 测试支持 crate
//!
//! 提供宿主测试使用的 Mock 实现。
//!
//! 这里不依赖工作区内其它 crate：各 crate 在自己的测试中为这些类型实现
//! 对应的 trait（例如 `sync::ArchOps`、`chardrv::ProcessSource`）。

#![no_std]

extern crate alloc;

pub mod mock;
