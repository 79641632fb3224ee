//! Integration tests for configuration loading and validation

use ps3mem::config::{validate_config, Config, ConfigLoader};
use ps3mem::{EmulatorLayout, GuestAddress};
use std::io::Write;

#[test]
fn load_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ps3mem.toml");

    let config = Config {
        process_name: "rpcs3-nightly".to_string(),
        layout: EmulatorLayout {
            low_boundary: 0x0010_0000,
            low_base: 0x5_0000_0000,
            main_base: 0x6_0000_0000,
        },
    };

    let loader = ConfigLoader::new(&path);
    loader.save(&config).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(loaded, config);
    assert!(validate_config(&loaded).is_ok());
}

#[test]
fn load_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ps3mem.toml");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"
process_name = "rpcs3"

[layout]
low_boundary = 0x00792000
low_base = 0x400000000
main_base = 0x300000000
"#
    )
    .unwrap();

    let loaded = ConfigLoader::new(&path).load().unwrap();
    assert_eq!(loaded, Config::default());

    // The loaded layout translates exactly like the built-in default
    assert_eq!(
        loaded.layout.translate(GuestAddress::new(0x100)),
        0x4_0000_0100
    );
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = ConfigLoader::new(dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ps3mem.toml");
    std::fs::write(&path, "process_name = [42]").unwrap();

    assert!(ConfigLoader::new(&path).load().is_err());
}
