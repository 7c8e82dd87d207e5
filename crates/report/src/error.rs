//! Error types for the eros-report crate.

/// Error type for all fallible operations in the eros-report crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    /// Returned when serializing map traces or layout to JSON fails.
    #[error("failed to serialize map data: {reason}")]
    MapSerialization {
        /// The underlying serializer message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReportError::MapSerialization {
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "failed to serialize map data: boom");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ReportError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ReportError>();
    }
}
