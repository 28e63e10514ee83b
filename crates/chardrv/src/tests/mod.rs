// Unit tests for the chardrv core, run with host `cargo test`.

use alloc::boxed::Box;
use alloc::vec::Vec;

use test_support::mock::proc::MockProcessTable;
use vfs::{FsError, UserBuffer, UserSliceMut};

use crate::{ProcessRecord, ProcessSource};

mod buffer;
mod device;
mod session;
mod transfer;

impl ProcessSource for MockProcessTable {
    fn records(&self) -> Box<dyn Iterator<Item = ProcessRecord> + '_> {
        self.begin_pass();
        Box::new(self.entries().iter().map(|(name, pid)| {
            self.note_yielded();
            ProcessRecord::new(name.clone(), *pid)
        }))
    }
}

/// 复制总是失败的调用者缓冲区
struct FaultyBuffer {
    len: usize,
    attempts: usize,
}

impl FaultyBuffer {
    fn new(len: usize) -> Self {
        Self { len, attempts: 0 }
    }
}

impl UserBuffer for FaultyBuffer {
    fn len(&self) -> usize {
        self.len
    }

    fn copy_to_user(&mut self, _src: &[u8]) -> Result<(), FsError> {
        self.attempts += 1;
        Err(FsError::Fault)
    }
}

/// 示例进程表：`init 1 \nkworker 12 \n`，共 20 字节
fn two_tasks() -> MockProcessTable {
    MockProcessTable::new(&[("init", 1), ("kworker", 12)])
}

const TWO_TASKS_TEXT: &[u8] = b"init 1 \nkworker 12 \n";

const TWO_TASKS_LEN: usize = TWO_TASKS_TEXT.len();

/// 以 `len` 字节的缓冲区调用一次 `f`，返回读到的数据
fn read_chunk(
    len: usize,
    f: impl FnOnce(&mut UserSliceMut<'_>) -> Result<usize, FsError>,
) -> Result<Vec<u8>, FsError> {
    let mut out = alloc::vec![0u8; len];
    let n = f(&mut UserSliceMut::new(&mut out))?;
    out.truncate(n);
    Ok(out)
}
