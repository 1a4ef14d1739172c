use enumland_logging::{enumland_info, initialize, LogDestination};
use log::LevelFilter;

#[test]
fn file_destination_receives_records() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("enumland.log");

    assert!(initialize(LogDestination::File(path.clone()), LevelFilter::Info));
    enumland_info!("committed query {:?}", "example.com");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("committed query \"example.com\""));

    // The global logger is already set, so a second install is refused.
    assert!(!initialize(
        LogDestination::File(temp.path().join("second.log")),
        LevelFilter::Info
    ));
}
