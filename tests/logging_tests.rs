use log::{Level, LevelFilter, Record};
use minesweeper::{format_record, level_from};

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
}

#[test]
fn test_line_names_level_and_module() {
    let line = format_record(
        &Record::builder()
            .args(format_args!("saved {} user(s)", 3))
            .level(Level::Info)
            .target("minesweeper")
            .module_path(Some("minesweeper::user"))
            .build(),
    );
    assert_eq!(line, "INFO  minesweeper::user: saved 3 user(s)");

    let line = format_record(
        &Record::builder()
            .args(format_args!("x"))
            .level(Level::Warn)
            .target("sim")
            .build(),
    );
    assert_eq!(line, "WARN  sim: x");
}
