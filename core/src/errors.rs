use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwatchError {
    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Color parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failures while pulling the color string out of the request envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("failed to decode request body: {reason}")]
    BodyDecode { reason: String },
}

/// Failures while parsing a `#RRGGBB` color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("color string must start with '#'")]
    MissingPrefix,

    #[error("expected 6 hex digits after '#', found {found}")]
    InvalidLength { found: usize },

    #[error("invalid hex digit '{digit}'")]
    InvalidDigit { digit: char },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("PNG encoding failed: {reason}")]
    Png { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Failed to upload object to s3://{bucket}/{key}: {reason}")]
    Put {
        bucket: String,
        key: String,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },
}

pub type Result<T> = std::result::Result<T, SwatchError>;

impl SwatchError {
    /// True when the request itself was malformed, as opposed to a failure
    /// in this service or the storage backend. The HTTP runner maps client
    /// errors to 400 and everything else to 500.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SwatchError::Envelope(_) | SwatchError::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_error_display() {
        let error = EnvelopeError::BodyDecode {
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to decode request body: expected value at line 1"
        );
        assert_eq!(EnvelopeError::EmptyBody.to_string(), "request body is empty");
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::MissingPrefix.to_string(),
            "color string must start with '#'"
        );
        assert_eq!(
            ParseError::InvalidLength { found: 3 }.to_string(),
            "expected 6 hex digits after '#', found 3"
        );
        assert_eq!(
            ParseError::InvalidDigit { digit: 'z' }.to_string(),
            "invalid hex digit 'z'"
        );
    }

    #[test]
    fn test_upload_error_display() {
        let error = UploadError::Put {
            bucket: "color".to_string(),
            key: "swatch.png".to_string(),
            reason: "access denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to upload object to s3://color/swatch.png: access denied"
        );
    }

    #[test]
    fn test_error_chain_display() {
        let error = SwatchError::from(ParseError::MissingPrefix);
        let rendered = error.to_string();
        assert!(rendered.contains("Color parse error"));
        assert!(rendered.contains("must start with '#'"));
    }

    #[test]
    fn test_is_client_error() {
        let client_errors = vec![
            SwatchError::Envelope(EnvelopeError::EmptyBody),
            SwatchError::Parse(ParseError::MissingPrefix),
        ];
        for error in client_errors {
            assert!(error.is_client_error(), "should be a client error: {error:?}");
        }

        let server_errors = vec![
            SwatchError::Encode(EncodeError::Png {
                reason: "test".to_string(),
            }),
            SwatchError::Upload(UploadError::Put {
                bucket: "test".to_string(),
                key: "test".to_string(),
                reason: "test".to_string(),
            }),
            SwatchError::Config(ConfigError::ValidationFailed {
                reason: "test".to_string(),
            }),
        ];
        for error in server_errors {
            assert!(
                !error.is_client_error(),
                "should not be a client error: {error:?}"
            );
        }
    }
}
