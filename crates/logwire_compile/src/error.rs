//! Compile error taxonomy.

use logwire_core::ConfigurationError;
use logwire_provider::ProviderError;

/// Result type for the compile pipeline.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors surfaced by a compile run. All of them propagate to the
/// top-level compile call; none are swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Malformed or incomplete subscription filter configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The log source is already bound to a different destination. The
    /// platform allows exactly one subscription per log source, and this
    /// run must not silently replace an unrelated one.
    #[error(
        "log group {log_group} already has a subscription filter delivering to {existing}; \
         the platform allows one subscription per log group"
    )]
    ResourceLimitExceeded {
        /// Name of the conflicting log source.
        log_group: String,
        /// Destination of the existing subscription.
        existing: String,
    },

    /// The requested log source does not exist.
    #[error("log group not found: {0}")]
    NotFound(String),

    /// The paginated log source search did not terminate.
    #[error("log group search for {log_group} exceeded {pages} pages without terminating")]
    PageLimit {
        /// Name of the log source being searched for.
        log_group: String,
        /// Number of pages followed before giving up.
        pages: usize,
    },

    /// A provider-side failure, reported verbatim.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_error_names_log_group() {
        let err = CompileError::ResourceLimitExceeded {
            log_group: "/svc/x".to_string(),
            existing: "arn:other".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/svc/x"));
        assert!(msg.contains("one subscription per log group"));
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err = CompileError::from(ProviderError::Throttled("Rate exceeded".to_string()));
        assert!(err.to_string().contains("Rate exceeded"));
    }
}
