use crate::MessageBuffer;

#[test]
fn test_new_buffer_is_empty() {
    let buf = MessageBuffer::new(16);
    assert_eq!(buf.capacity(), 16);
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(!buf.is_full());
    assert_eq!(buf.remaining(), 16);
    assert_eq!(buf.as_bytes(), b"");
}

#[test]
fn test_append_within_capacity() {
    let mut buf = MessageBuffer::new(16);
    assert_eq!(buf.append(b"init 1 \n"), 8);
    assert_eq!(buf.append(b"sh 2 \n"), 6);
    assert_eq!(buf.as_bytes(), b"init 1 \nsh 2 \n");
    assert_eq!(buf.remaining(), 2);
}

#[test]
fn test_append_truncates_at_capacity() {
    let mut buf = MessageBuffer::new(10);
    assert_eq!(buf.append(b"init 1 \n"), 8);
    assert_eq!(buf.append(b"kworker 12 \n"), 2);
    assert_eq!(buf.as_bytes(), b"init 1 \nkw");
    assert!(buf.is_full());

    assert_eq!(buf.append(b"more"), 0);
    assert_eq!(buf.len(), 10);
}

#[test]
fn test_zero_capacity() {
    let mut buf = MessageBuffer::new(0);
    assert!(buf.is_full());
    assert!(buf.is_empty());
    assert_eq!(buf.append(b"x"), 0);
}

#[test]
fn test_reset() {
    let mut buf = MessageBuffer::new(8);
    buf.append(b"abcdefgh");
    buf.reset();
    assert!(buf.is_empty());
    assert_eq!(buf.remaining(), 8);
    assert_eq!(buf.append(b"xy"), 2);
    assert_eq!(buf.as_bytes(), b"xy");
}
