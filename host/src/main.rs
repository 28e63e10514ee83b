//! 在宿主机上加载 chardrv 模块，并像 `cat /dev/chardrv` 一样输出设备内容

mod log;
mod procfs;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use chardrv::{ChardrvModule, DeviceConfig};
use vfs::{DEVICE_REGISTRY, FDTable, FsError, UserSliceMut};

use crate::procfs::ProcfsSource;

/// 每次 read 请求的字节数
const DEFAULT_CHUNK: usize = 512;

#[derive(Debug)]
enum HostError {
    Device(FsError),
    Io(io::Error),
}

impl From<FsError> for HostError {
    fn from(err: FsError) -> Self {
        HostError::Device(err)
    }
}

impl From<io::Error> for HostError {
    fn from(err: io::Error) -> Self {
        HostError::Io(err)
    }
}

fn run(chunk: usize) -> Result<(), HostError> {
    let module = ChardrvModule::init(
        &*DEVICE_REGISTRY,
        Arc::new(ProcfsSource::default()),
        DeviceConfig::default(),
    )?;

    let fds = FDTable::default();
    let fd = fds.alloc(DEVICE_REGISTRY.open(&module.device_path())?)?;
    let file = fds.get(fd)?;

    let mut stdout = io::stdout().lock();
    let mut buf = vec![0u8; chunk];
    loop {
        let n = file.read(&mut UserSliceMut::new(&mut buf))?;
        if n == 0 {
            break;
        }
        stdout.write_all(&buf[..n])?;
    }
    stdout.flush()?;

    drop(file);
    fds.close(fd)?;
    module.exit();
    Ok(())
}

fn main() -> ExitCode {
    log::init();

    let chunk = match std::env::args().nth(1) {
        None => DEFAULT_CHUNK,
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("usage: chardrv-host [CHUNK_BYTES]");
                return ExitCode::from(2);
            }
        },
    };

    match run(chunk) {
        Ok(()) => ExitCode::SUCCESS,
        Err(HostError::Device(err)) => {
            eprintln!("chardrv-host: {}", err);
            ExitCode::FAILURE
        }
        Err(HostError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(HostError::Io(err)) => {
            eprintln!("chardrv-host: {}", err);
            ExitCode::FAILURE
        }
    }
}
