//! Error taxonomy tests.
//!
//! Every failure on the submit path turns into user-visible text; the
//! categories must stay distinguishable from each other.

use brainscan::BrainScanError;

#[test]
fn test_file_not_found_display() {
    let err = BrainScanError::FileNotFound("scan.jpg".to_string());
    let display = format!("{}", err);
    assert!(display.contains("File not found"));
    assert!(display.contains("scan.jpg"));
}

#[test]
fn test_server_error_not_confusable_with_network_error() {
    let server = BrainScanError::Server {
        status: 502,
        body: "bad gateway".to_string(),
    };
    let display = format!("{}", server);
    assert!(display.starts_with("Server error:"));
    assert!(!display.starts_with("Network error:"));
}

#[test]
fn test_error_display_nonempty() {
    let errors = vec![
        BrainScanError::Config("missing home directory".to_string()),
        BrainScanError::FileNotFound("x.png".to_string()),
        BrainScanError::Server {
            status: 404,
            body: "not found".to_string(),
        },
        BrainScanError::MalformedResponse("unexpected end of input".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message for {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BrainScanError = io_err.into();
    assert!(matches!(err, BrainScanError::Io(_)));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BrainScanError = json_err.into();
    assert!(matches!(err, BrainScanError::Json(_)));
}

#[test]
fn test_error_debug() {
    let err = BrainScanError::Config("test".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("Config"));
    assert!(debug.contains("test"));
}
