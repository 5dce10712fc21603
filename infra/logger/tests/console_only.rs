use fp_logger::{ConsoleFormat, LevelFilter, Logger};

#[test]
fn console_only_has_no_file_sink() {
    let logger = Logger::builder()
        .name("footprints-console-only")
        .format(ConsoleFormat::Json)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_sink(), "console-only logger should not create a file guard");
    assert!(logger.guard().is_none());
}
