//! Scripted identity double.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use logwire_provider::{Identity, ProviderError};

/// In-memory [`Identity`] implementation returning a fixed account id or
/// an injected failure.
#[derive(Debug)]
pub struct SimIdentity {
    account_id: String,
    fail: Option<ProviderError>,
    calls: AtomicUsize,
}

impl SimIdentity {
    /// Identity that resolves to the given account id.
    #[must_use]
    pub fn new(account_id: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            fail: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Identity whose resolution always fails.
    #[must_use]
    pub fn failing(err: ProviderError) -> Self {
        Self {
            account_id: String::new(),
            fail: Some(err),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of identity resolutions made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Identity for SimIdentity {
    async fn account_id(&self) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail {
            Some(err) => Err(err.clone()),
            None => Ok(self.account_id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_account_id() {
        let sim = SimIdentity::new("123456789012");
        assert_eq!(sim.account_id().await.unwrap(), "123456789012");
        assert_eq!(sim.calls(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let sim = SimIdentity::failing(ProviderError::AccessDenied("no sts".to_string()));
        assert!(sim.account_id().await.is_err());
    }
}
