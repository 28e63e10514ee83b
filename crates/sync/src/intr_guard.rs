//! 中断保护器
//!
//! 基于 RAII 实现中断保护，在创建时禁用中断，销毁时恢复。
//!
//! 注意：禁用中断只能阻止**本地 CPU** 的“任务 vs 本地中断”并发，
//! 多核共享数据仍需要配合自旋锁。

use crate::arch_ops;

/// 中断保护器
///
/// 在创建时禁用中断并保存之前的状态；在销毁时恢复。
///
/// # 示例
/// ```ignore
/// {
///     let guard = IntrGuard::new(); // 禁用中断
///     // 临界区代码
/// } // 离开作用域，自动恢复中断状态
/// ```
pub struct IntrGuard {
    flags: usize,
}

impl IntrGuard {
    /// 禁用中断并返回一个 IntrGuard 实例。
    pub fn new() -> Self {
        let flags = match arch_ops() {
            // SAFETY: 保存的状态会在 drop 或 restore 时原样写回
            Some(ops) => unsafe { ops.read_and_disable_interrupts() },
            None => 0,
        };
        Self { flags }
    }

    /// 交出保存的中断状态而不恢复，由调用者稍后通过 [`IntrGuard::restore`] 写回。
    pub(crate) fn into_flags(self) -> usize {
        let flags = self.flags;
        core::mem::forget(self);
        flags
    }

    /// 写回由 [`IntrGuard::into_flags`] 交出的中断状态。
    ///
    /// # Safety
    /// flags 必须来自同一 CPU 上先前的 `into_flags`，且只能写回一次
    pub(crate) unsafe fn restore(flags: usize) {
        if let Some(ops) = arch_ops() {
            unsafe { ops.restore_interrupts(flags) };
        }
    }
}

impl Default for IntrGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IntrGuard {
    fn drop(&mut self) {
        // SAFETY: flags 是在创建 IntrGuard 时保存的
        unsafe { Self::restore(self.flags) };
    }
}
