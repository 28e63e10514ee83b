//! 架构相关操作的 Mock 实现

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock 架构操作
///
/// 用一个布尔值模拟本地中断使能位。
pub struct MockArchOps {
    /// 当前中断是否开启
    pub interrupt_state: AtomicBool,
    /// 关中断调用次数
    pub disable_calls: AtomicUsize,
}

impl MockArchOps {
    /// 创建中断处于开启状态的实例
    pub const fn new() -> Self {
        Self {
            interrupt_state: AtomicBool::new(true),
            disable_calls: AtomicUsize::new(0),
        }
    }

    /// 读取并关闭中断，返回之前的状态
    ///
    /// # Safety
    /// 仅用于测试，无实际约束
    pub unsafe fn read_and_disable_interrupts(&self) -> usize {
        self.disable_calls.fetch_add(1, Ordering::SeqCst);
        self.interrupt_state.swap(false, Ordering::SeqCst) as usize
    }

    /// 恢复中断状态
    ///
    /// # Safety
    /// 仅用于测试，无实际约束
    pub unsafe fn restore_interrupts(&self, flags: usize) {
        self.interrupt_state.store(flags != 0, Ordering::SeqCst);
    }

    /// 当前中断是否开启
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupt_state.load(Ordering::SeqCst)
    }
}

impl Default for MockArchOps {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局 Mock 实例
pub static MOCK_ARCH_OPS: MockArchOps = MockArchOps::new();
