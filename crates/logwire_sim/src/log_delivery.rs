//! Scripted log delivery double.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use logwire_provider::{LogDelivery, LogGroupPage, LogGroupRecord, ProviderError, SubscriptionRecord};

/// In-memory [`LogDelivery`] implementation driven by scripted state.
///
/// Pages are keyed by the continuation token the caller presents, so tests
/// can script multi-page sequences and even token cycles. Unscripted
/// lookups return an empty final page.
#[derive(Debug, Default)]
pub struct SimLogDelivery {
    pages: HashMap<Option<String>, LogGroupPage>,
    subscriptions: HashMap<String, Vec<SubscriptionRecord>>,
    fail_subscriptions: Option<ProviderError>,
    fail_log_groups: Option<ProviderError>,
    subscription_calls: AtomicUsize,
    log_group_calls: AtomicUsize,
    log_group_prefixes: Mutex<Vec<String>>,
}

impl SimLogDelivery {
    /// Create a double with no scripted state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a single log source on the first page.
    #[must_use]
    pub fn with_log_group(mut self, name: &str, id: &str) -> Self {
        self.pages
            .entry(None)
            .or_default()
            .groups
            .push(LogGroupRecord {
                name: name.to_string(),
                id: id.to_string(),
            });
        self
    }

    /// Script the page returned for a given continuation token
    /// (`None` keys the first page).
    #[must_use]
    pub fn with_page(mut self, token: Option<&str>, page: LogGroupPage) -> Self {
        self.pages.insert(token.map(str::to_string), page);
        self
    }

    /// Script an existing subscription on a log source.
    #[must_use]
    pub fn with_subscription(mut self, log_group: &str, destination_arn: &str) -> Self {
        self.subscriptions
            .entry(log_group.to_string())
            .or_default()
            .push(SubscriptionRecord {
                destination_arn: destination_arn.to_string(),
                filter_name: None,
            });
        self
    }

    /// Make every subscription listing fail with the given error.
    #[must_use]
    pub fn fail_subscriptions_with(mut self, err: ProviderError) -> Self {
        self.fail_subscriptions = Some(err);
        self
    }

    /// Make every log source search fail with the given error.
    #[must_use]
    pub fn fail_log_groups_with(mut self, err: ProviderError) -> Self {
        self.fail_log_groups = Some(err);
        self
    }

    /// Number of subscription listings made so far.
    #[must_use]
    pub fn subscription_calls(&self) -> usize {
        self.subscription_calls.load(Ordering::SeqCst)
    }

    /// Number of log source search pages fetched so far.
    #[must_use]
    pub fn log_group_calls(&self) -> usize {
        self.log_group_calls.load(Ordering::SeqCst)
    }

    /// Name prefixes presented to the log source search, in call order.
    #[must_use]
    pub fn log_group_prefixes(&self) -> Vec<String> {
        self.log_group_prefixes
            .lock()
            .expect("prefix record lock poisoned")
            .clone()
    }
}

#[async_trait]
impl LogDelivery for SimLogDelivery {
    async fn subscriptions(
        &self,
        log_group_name: &str,
    ) -> Result<Vec<SubscriptionRecord>, ProviderError> {
        self.subscription_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.fail_subscriptions {
            return Err(err.clone());
        }
        Ok(self
            .subscriptions
            .get(log_group_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn log_groups(
        &self,
        name_prefix: &str,
        next_token: Option<String>,
    ) -> Result<LogGroupPage, ProviderError> {
        self.log_group_calls.fetch_add(1, Ordering::SeqCst);
        self.log_group_prefixes
            .lock()
            .expect("prefix record lock poisoned")
            .push(name_prefix.to_string());
        if let Some(err) = &self.fail_log_groups {
            return Err(err.clone());
        }
        // Pages are returned as scripted, not re-filtered by prefix, so
        // tests control exactly which near-miss names the caller sees.
        Ok(self.pages.get(&next_token).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_pages_and_counters() {
        let sim = SimLogDelivery::new()
            .with_page(
                None,
                LogGroupPage {
                    groups: vec![LogGroupRecord {
                        name: "/a".to_string(),
                        id: "arn-a".to_string(),
                    }],
                    next_token: Some("t1".to_string()),
                },
            )
            .with_page(
                Some("t1"),
                LogGroupPage {
                    groups: vec![LogGroupRecord {
                        name: "/ab".to_string(),
                        id: "arn-ab".to_string(),
                    }],
                    next_token: None,
                },
            );

        let first = sim.log_groups("/a", None).await.unwrap();
        assert_eq!(first.next_token.as_deref(), Some("t1"));
        let second = sim.log_groups("/a", first.next_token).await.unwrap();
        assert_eq!(second.groups[0].name, "/ab");
        assert_eq!(sim.log_group_calls(), 2);
        assert_eq!(sim.log_group_prefixes(), vec!["/a", "/a"]);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let sim = SimLogDelivery::new()
            .fail_subscriptions_with(ProviderError::Throttled("slow down".to_string()));
        let err = sim.subscriptions("/a").await.unwrap_err();
        assert_eq!(err, ProviderError::Throttled("slow down".to_string()));
    }
}
