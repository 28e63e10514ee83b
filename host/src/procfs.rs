//! 基于 `/proc` 的进程枚举

use std::fs;
use std::path::{Path, PathBuf};

use chardrv::{ProcessRecord, ProcessSource};

/// 读取 `/proc/<pid>/comm` 的进程表
pub struct ProcfsSource {
    root: PathBuf,
}

impl ProcfsSource {
    /// 以 `root` 作为 procfs 挂载点
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 按 pid 升序列出进程号
    fn pids(&self) -> Vec<u32> {
        let Ok(dir) = fs::read_dir(&self.root) else {
            log::warn!("procfs: cannot read {}", self.root.display());
            return Vec::new();
        };
        let mut pids: Vec<u32> = dir
            .filter_map(|entry| entry.ok()?.file_name().to_str()?.parse().ok())
            .collect();
        pids.sort_unstable();
        pids
    }
}

impl Default for ProcfsSource {
    fn default() -> Self {
        Self::new("/proc")
    }
}

fn read_comm(root: &Path, pid: u32) -> Option<String> {
    let comm = fs::read_to_string(root.join(pid.to_string()).join("comm")).ok()?;
    Some(comm.trim_end_matches('\n').to_string())
}

impl ProcessSource for ProcfsSource {
    fn records(&self) -> Box<dyn Iterator<Item = ProcessRecord> + '_> {
        // 进程可能在枚举期间退出，读不到 comm 的直接跳过
        Box::new(
            self.pids()
                .into_iter()
                .filter_map(|pid| Some(ProcessRecord::new(read_comm(&self.root, pid)?, pid))),
        )
    }
}
