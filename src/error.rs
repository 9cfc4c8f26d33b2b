//! Error types for CIDR parsing and aggregation.

use thiserror::Error;

/// Errors raised while optimizing a list of CIDR blocks.
#[derive(Debug, Error)]
pub enum CidrError {
    /// A line is not a valid IPv4/IPv6 address or CIDR literal.
    #[error("invalid CIDR '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// The aggregated set broke one of its own invariants.
    #[error("merge failed: {0}")]
    Merge(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CidrError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        CidrError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let e = CidrError::parse("not-a-cidr", "invalid address");
        assert_eq!(e.to_string(), "invalid CIDR 'not-a-cidr': invalid address");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let e: CidrError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(e.to_string(), "pipe");
    }
}
