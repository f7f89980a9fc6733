use {
    base::{FileLogger, StdoutLogger, format_today},
    log::Log,
    std::fs,
};

#[test]
fn test_stdout_logger_accepts_records() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Debug)
        .build();
    assert!(logger.enabled(&metadata));

    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .file(Some("test.rs"))
        .line(Some(42))
        .args(format_args!("test message"))
        .build();
    logger.log(&record);
    logger.flush();
}

#[test]
fn test_file_logger_writes_dated_file() {
    let test_dir =
        std::env::temp_dir().join(format!("gesture-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).unwrap();
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .file(Some("main.rs"))
        .line(Some(7))
        .args(format_args!("no assets found"))
        .build();
    logger.log(&record);
    logger.flush();

    let content = fs::read_to_string(test_dir.join(format!("{}.log", format_today()))).unwrap();
    assert!(content.contains("WARN"));
    assert!(content.contains("main.rs:7"));
    assert!(content.ends_with("no assets found\n"));

    fs::remove_dir_all(&test_dir).ok();
}
