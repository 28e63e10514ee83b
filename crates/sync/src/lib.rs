//! 同步原语
//!
//! 向驱动层提供自旋锁与中断保护：
//!
//! - [`SpinLock`] - 基于 `lock_api` 的互斥自旋锁，持锁期间关闭本地中断
//! - [`IntrGuard`] - RAII 风格的中断保存/恢复
//!
//! # 架构依赖
//!
//! 中断开关通过 [`ArchOps`] trait 抽象。内核环境在启动时调用
//! [`register_arch_ops`] 注册实现；宿主环境（测试、用户态工具）不注册时，
//! 中断操作退化为空操作，锁本身的互斥语义不受影响。

#![no_std]

mod intr_guard;
mod raw_spin_lock;
mod spin_lock;

pub use intr_guard::IntrGuard;
pub use raw_spin_lock::RawSpinLock;
pub use spin_lock::{SpinLock, SpinLockGuard};

use core::sync::atomic::{AtomicUsize, Ordering};

/// 架构相关操作的 trait
///
/// 由运行环境实现并注册，提供本地中断控制
pub trait ArchOps: Send + Sync {
    /// 读取并禁用中断，返回之前的状态
    ///
    /// # Safety
    /// 调用者必须确保在适当的上下文中调用
    unsafe fn read_and_disable_interrupts(&self) -> usize;

    /// 恢复中断状态
    ///
    /// # Safety
    /// flags 必须是之前 read_and_disable_interrupts 返回的值
    unsafe fn restore_interrupts(&self, flags: usize);
}

/// 全局架构操作实例（存储 fat pointer 的两个部分）
static ARCH_OPS_DATA: AtomicUsize = AtomicUsize::new(0);
static ARCH_OPS_VTABLE: AtomicUsize = AtomicUsize::new(0);

/// 注册架构操作实现
///
/// # Safety
/// 必须在单线程环境下调用，且只能调用一次
pub unsafe fn register_arch_ops(ops: &'static dyn ArchOps) {
    let ptr = ops as *const dyn ArchOps;
    // SAFETY: fat pointer 的布局是 (data, vtable)
    let (data, vtable) = unsafe { core::mem::transmute::<*const dyn ArchOps, (usize, usize)>(ptr) };
    ARCH_OPS_VTABLE.store(vtable, Ordering::Release);
    ARCH_OPS_DATA.store(data, Ordering::Release);
}

/// 获取架构操作实例，未注册时返回 `None`
#[inline]
pub(crate) fn arch_ops() -> Option<&'static dyn ArchOps> {
    let data = ARCH_OPS_DATA.load(Ordering::Acquire);
    if data == 0 {
        return None;
    }
    let vtable = ARCH_OPS_VTABLE.load(Ordering::Acquire);
    // SAFETY: data 和 vtable 是通过 register_arch_ops 设置的有效指针
    Some(unsafe { &*core::mem::transmute::<(usize, usize), *const dyn ArchOps>((data, vtable)) })
}
