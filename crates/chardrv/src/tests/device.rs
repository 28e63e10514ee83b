use alloc::sync::Arc;

use super::*;
use crate::{DeviceConfig, ProcessListDevice, Session};
use vfs::CharDevice;

fn device(capacity: usize) -> (Arc<MockProcessTable>, ProcessListDevice) {
    let table = Arc::new(two_tasks());
    let device = ProcessListDevice::new(table.clone(), DeviceConfig::with_capacity(capacity));
    (table, device)
}

#[test]
fn test_default_config() {
    let config = DeviceConfig::default();
    assert_eq!(config.device_name, "chardrv");
    assert_eq!(config.class_name, "chardrv");
    assert_eq!(config.buffer_capacity, 8000);
    assert_eq!(config.mode.bits(), 0o444);
    assert_eq!(config.minor, 0);
}

#[test]
fn test_open_builds_fresh_session() {
    let (table, device) = device(8000);

    let first = device.open(0).unwrap();
    let second = device.open(0).unwrap();
    assert_eq!(table.passes(), 2);
    assert_eq!(device.open_count(), 2);

    let session = first.as_any().downcast_ref::<Session>().unwrap();
    assert_eq!(session.contents(), TWO_TASKS_TEXT);
    assert_eq!(read_chunk(10, |out| second.read(out)).unwrap(), b"init 1 \nkw");
    assert_eq!(first.offset(), 0);
}

#[test]
fn test_open_unknown_minor() {
    let (table, device) = device(8000);
    assert_eq!(device.open(1).err(), Some(FsError::NoDevice));
    assert_eq!(table.passes(), 0);
}

#[test]
fn test_session_capacity_follows_config() {
    let (_table, device) = device(10);
    let session = device.open_session();
    assert_eq!(session.contents(), b"init 1 \nkw");
    assert_eq!(device.config().buffer_capacity, 10);
}
