use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrainScanError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error: {status} - {body}")]
    Server { status: u16, body: String },

    #[error("Malformed response: declared JSON but failed to parse: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BrainScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = BrainScanError::Server {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(format!("{}", err), "Server error: 500 - internal error");
    }

    #[test]
    fn test_malformed_response_display() {
        let err = BrainScanError::MalformedResponse("expected value at line 1".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Malformed response"));
        assert!(display.contains("expected value"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: BrainScanError = io_err.into();
        assert!(matches!(err, BrainScanError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
        let err: BrainScanError = json_err.into();
        assert!(matches!(err, BrainScanError::Json(_)));
    }
}
