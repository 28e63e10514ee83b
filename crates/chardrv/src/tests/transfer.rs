use super::*;
use crate::{MessageBuffer, build_snapshot, transfer};

fn filled() -> MessageBuffer {
    let mut buf = MessageBuffer::new(8000);
    build_snapshot(&mut buf, &two_tasks());
    buf
}

#[test]
fn test_first_read_advances_offset() {
    let buf = filled();
    let mut pos = 0;

    let data = read_chunk(10, |out| transfer::read(&buf, &mut pos, out)).unwrap();
    assert_eq!(data, b"init 1 \nkw");
    assert_eq!(pos, 10);
}

#[test]
fn test_read_at_end_returns_zero() {
    let buf = filled();
    assert_eq!(buf.len(), 20);

    // 恰好位于有效长度处，以及越过末尾一个字节
    for start in [TWO_TASKS_LEN, TWO_TASKS_LEN + 1] {
        let mut pos = start;
        for _ in 0..3 {
            let data = read_chunk(100, |out| transfer::read(&buf, &mut pos, out)).unwrap();
            assert!(data.is_empty());
            assert_eq!(pos, start);
        }
    }
}

#[test]
fn test_eof_does_not_touch_user_buffer() {
    let buf = filled();
    let mut pos = TWO_TASKS_LEN;
    let mut out = FaultyBuffer::new(100);

    assert_eq!(transfer::read(&buf, &mut pos, &mut out), Ok(0));
    assert_eq!(out.attempts, 0);
}

#[test]
fn test_zero_length_request() {
    let buf = filled();
    let mut pos = 4;
    let mut out = FaultyBuffer::new(0);

    assert_eq!(transfer::read(&buf, &mut pos, &mut out), Ok(0));
    assert_eq!(pos, 4);
    assert_eq!(out.attempts, 0);
}

#[test]
fn test_read_bound() {
    let buf = filled();
    for offset in [0usize, 1, 8, 19, TWO_TASKS_LEN, TWO_TASKS_LEN + 1, 30] {
        for requested in [0usize, 1, 5, 12, 20, 21, 100] {
            let expected = requested.min(TWO_TASKS_LEN.saturating_sub(offset));
            let mut pos = offset;
            let data = read_chunk(requested, |out| transfer::read(&buf, &mut pos, out)).unwrap();

            assert_eq!(data.len(), expected);
            assert_eq!(pos, offset + expected);
            if expected > 0 {
                assert_eq!(data, &TWO_TASKS_TEXT[offset..offset + expected]);
            }
        }
    }
}

#[test]
fn test_fault_leaves_offset_unchanged() {
    let buf = filled();
    let mut pos = 3;
    let mut out = FaultyBuffer::new(5);

    assert_eq!(
        transfer::read(&buf, &mut pos, &mut out),
        Err(FsError::Fault)
    );
    assert_eq!(pos, 3);
    assert_eq!(out.attempts, 1);

    // 之后的正常读取从原位置继续
    let data = read_chunk(5, |out| transfer::read(&buf, &mut pos, out)).unwrap();
    assert_eq!(data, b"t 1 \n");
}

#[test]
fn test_chunked_drain_is_monotonic() {
    let buf = filled();
    let mut pos = 0;
    let mut collected = Vec::new();

    loop {
        let before = pos;
        let data = read_chunk(4, |out| transfer::read(&buf, &mut pos, out)).unwrap();
        assert_eq!(pos, before + data.len());
        if data.is_empty() {
            break;
        }
        collected.extend_from_slice(&data);
    }

    assert_eq!(collected, TWO_TASKS_TEXT);
}

#[test]
fn test_read_at_is_positional() {
    let buf = filled();
    let data = read_chunk(7, |out| transfer::read_at(&buf, 8, out)).unwrap();
    assert_eq!(data, b"kworker");

    let data = read_chunk(7, |out| transfer::read_at(&buf, 99, out)).unwrap();
    assert!(data.is_empty());
}

#[test]
fn test_write_is_discarded() {
    let buf = filled();
    let payload = [0x55u8; 42];

    assert_eq!(transfer::write_discard(&payload), 42);
    assert_eq!(transfer::write_discard(&[]), 0);
    assert_eq!(buf.as_bytes(), TWO_TASKS_TEXT);
}
