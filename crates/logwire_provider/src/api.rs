//! Log delivery API traits and record types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// A subscription currently attached to a log source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Runtime identifier of the destination the subscription delivers to.
    pub destination_arn: String,
    /// Name of the subscription, when the provider reports one.
    pub filter_name: Option<String>,
}

/// A log source returned by a prefix search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogGroupRecord {
    /// Log source name.
    pub name: String,
    /// Permanent identifier (ARN-equivalent) of the log source.
    pub id: String,
}

/// One page of a paginated log source search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogGroupPage {
    /// Log sources on this page. A prefix search may include names that
    /// are proper prefixes but not exact matches.
    pub groups: Vec<LogGroupRecord>,
    /// Continuation token for the next page, if any.
    pub next_token: Option<String>,
}

/// The provider's log delivery API.
#[async_trait]
pub trait LogDelivery: Send + Sync {
    /// List subscriptions attached to a log source by exact name.
    async fn subscriptions(
        &self,
        log_group_name: &str,
    ) -> Result<Vec<SubscriptionRecord>, ProviderError>;

    /// Fetch one page of log sources matching a name prefix.
    async fn log_groups(
        &self,
        name_prefix: &str,
        next_token: Option<String>,
    ) -> Result<LogGroupPage, ProviderError>;
}

/// Account identity resolution, possibly a remote call.
#[async_trait]
pub trait Identity: Send + Sync {
    /// Resolve the account identifier used in ARN-equivalent construction.
    async fn account_id(&self) -> Result<String, ProviderError>;
}
