use super::*;
use crate::Session;
use vfs::{File, SeekWhence};

fn open_two() -> Session {
    Session::open(&two_tasks(), 8000)
}

#[test]
fn test_open_snapshots_and_starts_at_zero() {
    let session = open_two();
    assert_eq!(session.valid_length(), TWO_TASKS_LEN);
    assert_eq!(session.contents(), TWO_TASKS_TEXT);
    assert_eq!(session.offset(), 0);
    assert!(session.readable());
    assert!(!session.writable());
}

#[test]
fn test_sequential_reads() {
    let session = open_two();

    let first = read_chunk(10, |out| session.read(out)).unwrap();
    assert_eq!(first, b"init 1 \nkw");
    assert_eq!(session.offset(), 10);

    let rest = read_chunk(100, |out| session.read(out)).unwrap();
    assert_eq!(rest, b"orker 12 \n");
    assert_eq!(session.offset(), TWO_TASKS_LEN);

    assert!(read_chunk(100, |out| session.read(out)).unwrap().is_empty());
    assert_eq!(session.offset(), TWO_TASKS_LEN);
}

#[test]
fn test_fault_keeps_cursor() {
    let session = open_two();
    read_chunk(4, |out| session.read(out)).unwrap();

    let mut faulty = FaultyBuffer::new(8);
    assert_eq!(session.read(&mut faulty), Err(FsError::Fault));
    assert_eq!(session.offset(), 4);
}

#[test]
fn test_write_returns_length_and_keeps_state() {
    let session = open_two();
    read_chunk(3, |out| session.read(out)).unwrap();

    assert_eq!(session.write(&[0u8; 42]), Ok(42));
    assert_eq!(session.contents(), TWO_TASKS_TEXT);
    assert_eq!(session.offset(), 3);
}

#[test]
fn test_lseek() {
    let session = open_two();

    assert_eq!(session.lseek(8, SeekWhence::Set), Ok(8));
    assert_eq!(session.lseek(2, SeekWhence::Current), Ok(10));
    assert_eq!(session.lseek(-3, SeekWhence::End), Ok(17));
    assert_eq!(session.lseek(0, SeekWhence::End), Ok(20));

    assert_eq!(
        session.lseek(1, SeekWhence::End),
        Err(FsError::InvalidArgument)
    );
    assert_eq!(
        session.lseek(-1, SeekWhence::Set),
        Err(FsError::InvalidArgument)
    );
    assert_eq!(
        session.lseek(-21, SeekWhence::Current),
        Err(FsError::InvalidArgument)
    );
    assert_eq!(session.offset(), 20);

    session.lseek(0, SeekWhence::Set).unwrap();
    assert_eq!(read_chunk(4, |out| session.read(out)).unwrap(), b"init");
}

#[test]
fn test_read_at_keeps_cursor() {
    let session = open_two();
    session.lseek(5, SeekWhence::Set).unwrap();

    let data = read_chunk(7, |out| session.read_at(8, out)).unwrap();
    assert_eq!(data, b"kworker");
    assert_eq!(session.offset(), 5);
}

#[test]
fn test_release() {
    let session = open_two();
    assert_eq!(session.release(), Ok(()));
    assert!(session.is_released());
    assert_eq!(session.valid_length(), 0);

    assert_eq!(
        read_chunk(4, |out| session.read(out)),
        Err(FsError::BadFileDescriptor)
    );
    assert_eq!(
        read_chunk(4, |out| session.read_at(0, out)),
        Err(FsError::BadFileDescriptor)
    );
    assert_eq!(session.write(b"x"), Err(FsError::BadFileDescriptor));
    assert_eq!(
        session.lseek(0, SeekWhence::Set),
        Err(FsError::BadFileDescriptor)
    );
    assert_eq!(session.release(), Err(FsError::BadFileDescriptor));
}

#[test]
fn test_sessions_are_independent() {
    let table = two_tasks();
    let a = Session::open(&table, 8000);
    let b = Session::open(&table, 8000);
    assert_eq!(table.passes(), 2);

    read_chunk(100, |out| a.read(out)).unwrap();
    assert_eq!(a.offset(), TWO_TASKS_LEN);
    assert_eq!(b.offset(), 0);

    a.release().unwrap();
    assert_eq!(read_chunk(100, |out| b.read(out)).unwrap(), TWO_TASKS_TEXT);
}

#[test]
fn test_oversized_table_session() {
    let session = Session::open(&MockProcessTable::numbered(100), 64);
    assert_eq!(session.valid_length(), 64);

    let data = read_chunk(1000, |out| session.read(out)).unwrap();
    assert_eq!(data.len(), 64);
    assert!(data.starts_with(b"task_0 1 \ntask_1 2 \n"));
}
