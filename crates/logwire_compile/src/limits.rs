//! Pre-flight check against the one-subscription-per-log-source limit.

use logwire_core::Naming;
use logwire_provider::{Identity, LogDelivery};
use tracing::debug;

use crate::error::{CompileError, CompileResult};

/// Detects a conflicting subscription before any fragment is built.
///
/// The provider will reject or silently override a second subscription on
/// a log source, so a conflict must abort the run up front.
pub struct LimitChecker<'a> {
    log_delivery: &'a dyn LogDelivery,
    identity: &'a dyn Identity,
    naming: &'a dyn Naming,
}

impl<'a> LimitChecker<'a> {
    /// Create a checker over the provider collaborators.
    #[must_use]
    pub fn new(
        log_delivery: &'a dyn LogDelivery,
        identity: &'a dyn Identity,
        naming: &'a dyn Naming,
    ) -> Self {
        Self {
            log_delivery,
            identity,
            naming,
        }
    }

    /// Check that wiring `function` to `log_group` will not displace an
    /// unrelated subscription.
    ///
    /// The existing subscription (if any) and the destination this run
    /// would install are fetched concurrently. Returns the expected
    /// destination, which doubles as the function's runtime identifier.
    ///
    /// # Errors
    ///
    /// [`CompileError::ResourceLimitExceeded`] when the log source already
    /// delivers to a different destination; provider errors verbatim.
    pub async fn check(&self, log_group: &str, function: &str) -> CompileResult<String> {
        let (existing, expected) = tokio::try_join!(
            self.current_destination(log_group),
            self.expected_destination(function),
        )?;

        match existing {
            None => Ok(expected),
            Some(destination) if destination == expected => {
                // Re-asserting the same binding is idempotent.
                debug!(log_group, "existing subscription matches this deployment");
                Ok(expected)
            }
            Some(destination) => Err(CompileError::ResourceLimitExceeded {
                log_group: log_group.to_string(),
                existing: destination,
            }),
        }
    }

    async fn current_destination(&self, log_group: &str) -> CompileResult<Option<String>> {
        let subscriptions = self.log_delivery.subscriptions(log_group).await?;
        Ok(subscriptions.into_iter().next().map(|s| s.destination_arn))
    }

    async fn expected_destination(&self, function: &str) -> CompileResult<String> {
        let account_id = self.identity.account_id().await?;
        Ok(self.naming.runtime_id(function, &account_id))
    }
}
