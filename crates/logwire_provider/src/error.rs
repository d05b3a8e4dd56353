//! Provider error type.

/// Error returned by a log delivery provider.
///
/// Carries the provider's own message verbatim so the operator can
/// diagnose the provider-side cause. No retry or backoff happens at this
/// layer; that is the network client's concern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached.
    #[error("provider connection failed: {0}")]
    Connection(String),

    /// The provider throttled the request.
    #[error("provider throttled the request: {0}")]
    Throttled(String),

    /// The caller lacks permission for the request.
    #[error("provider denied access: {0}")]
    AccessDenied(String),

    /// Any other provider-reported failure.
    #[error("provider error: {0}")]
    Api(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_preserved_verbatim() {
        let err = ProviderError::Api("Rate exceeded (Service: CloudWatchLogs)".to_string());
        assert!(err.to_string().contains("Rate exceeded (Service: CloudWatchLogs)"));
    }
}
