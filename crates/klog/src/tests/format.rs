use super::*;

#[test]
fn test_message_truncation() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);

    let long_msg = "a".repeat(300);
    test_log!(log, LogLevel::Info, "{}", long_msg);

    let entry = log.read().unwrap();
    assert_eq!(entry.message().len(), crate::MAX_LOG_MESSAGE_LENGTH);
}

#[test]
fn test_truncation_keeps_char_boundary() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);

    // 3 字节字符，256 不是 3 的倍数
    let long_msg = "你".repeat(100);
    test_log!(log, LogLevel::Info, "{}", long_msg);

    let entry = log.read().unwrap();
    assert_eq!(entry.message().len(), 255);
    assert!(entry.message().chars().all(|c| c == '你'));
}

#[test]
fn test_empty_message() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);
    test_log!(log, LogLevel::Info, "");
    assert_eq!(log.read().unwrap().message(), "");
}

#[test]
fn test_format_log_entry_layout() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);
    test_log!(log, LogLevel::Info, "chardrv: device class registered correctly");

    let entry = log.read().unwrap();
    let line = crate::format_log_entry(&entry);
    assert!(line.starts_with(LogLevel::Info.color_code()));
    assert!(line.contains("[INFO]"));
    assert!(line.contains("chardrv: device class registered correctly"));
    assert!(line.ends_with("\x1b[0m"));
}
