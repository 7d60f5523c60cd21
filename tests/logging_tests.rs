use log::LevelFilter;
use tictactoe::{init_logging, level_from};

#[test]
fn test_level_parsing() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    assert_eq!(level_from(None), LevelFilter::Warn);
}

#[test]
fn test_init_logging_twice_is_harmless() {
    init_logging();
    init_logging();
    log::warn!("logger installed");
}

