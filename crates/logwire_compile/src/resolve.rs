//! Log source identifier resolution over a paginated prefix search.

use logwire_provider::LogDelivery;
use tracing::debug;

use crate::error::{CompileError, CompileResult};

/// Default cap on the number of pages followed during resolution.
pub const DEFAULT_MAX_PAGES: usize = 32;

/// Resolves a log source's permanent identifier by exact name.
///
/// The provider search is prefix-based and may return names that are
/// proper prefixes of other names, so every page is scanned for an exact
/// match before the continuation token is followed.
pub struct LogGroupResolver<'a> {
    api: &'a dyn LogDelivery,
    max_pages: usize,
}

impl<'a> LogGroupResolver<'a> {
    /// Create a resolver over a log delivery API.
    #[must_use]
    pub fn new(api: &'a dyn LogDelivery) -> Self {
        Self {
            api,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Cap the number of pages followed before giving up. Guards against
    /// a continuation token cycle from a misbehaving provider.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Resolve the permanent identifier of the log source named `name`.
    ///
    /// Stops at the first exact match; no further pages are fetched.
    ///
    /// # Errors
    ///
    /// [`CompileError::NotFound`] when pages are exhausted without an
    /// exact match, [`CompileError::PageLimit`] when the page cap is hit,
    /// and provider errors verbatim.
    pub async fn resolve(&self, name: &str) -> CompileResult<String> {
        let mut token: Option<String> = None;

        for page_index in 0..self.max_pages {
            let page = self.api.log_groups(name, token.take()).await?;
            debug!(name, page_index, groups = page.groups.len(), "scanning log group page");

            if let Some(group) = page.groups.iter().find(|g| g.name == name) {
                return Ok(group.id.clone());
            }

            match page.next_token {
                Some(next) => token = Some(next),
                None => return Err(CompileError::NotFound(name.to_string())),
            }
        }

        Err(CompileError::PageLimit {
            log_group: name.to_string(),
            pages: self.max_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logwire_provider::{LogGroupPage, LogGroupRecord};
    use logwire_sim::SimLogDelivery;

    fn record(name: &str, id: &str) -> LogGroupRecord {
        LogGroupRecord {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    fn two_pages() -> SimLogDelivery {
        SimLogDelivery::new()
            .with_page(
                None,
                LogGroupPage {
                    groups: vec![record("/a", "arn-a"), record("/ab", "arn-ab")],
                    next_token: Some("t1".to_string()),
                },
            )
            .with_page(
                Some("t1"),
                LogGroupPage {
                    groups: vec![record("/abc", "arn-abc")],
                    next_token: None,
                },
            )
    }

    #[tokio::test]
    async fn test_exact_match_on_later_page() {
        let sim = two_pages();
        let id = LogGroupResolver::new(&sim).resolve("/abc").await.unwrap();
        assert_eq!(id, "arn-abc");
        assert_eq!(sim.log_group_calls(), 2);
    }

    #[tokio::test]
    async fn test_stops_at_first_match() {
        let sim = two_pages();
        let id = LogGroupResolver::new(&sim).resolve("/a").await.unwrap();
        assert_eq!(id, "arn-a");
        assert_eq!(sim.log_group_calls(), 1);
    }

    #[tokio::test]
    async fn test_proper_prefix_is_not_a_match() {
        // "/a" also matches the prefix search for "/ab"; only the exact
        // name may resolve.
        let sim = two_pages();
        let id = LogGroupResolver::new(&sim).resolve("/ab").await.unwrap();
        assert_eq!(id, "arn-ab");
    }

    #[tokio::test]
    async fn test_requested_name_is_the_search_prefix() {
        let sim = two_pages();
        LogGroupResolver::new(&sim).resolve("/abc").await.unwrap();
        // Every page fetch searches by the requested name, verbatim.
        assert_eq!(sim.log_group_prefixes(), vec!["/abc", "/abc"]);
    }

    #[tokio::test]
    async fn test_absent_name_is_not_found() {
        let sim = two_pages();
        let err = LogGroupResolver::new(&sim).resolve("/x").await.unwrap_err();
        assert_eq!(err, CompileError::NotFound("/x".to_string()));
    }

    #[tokio::test]
    async fn test_token_cycle_terminates() {
        let sim = SimLogDelivery::new()
            .with_page(
                None,
                LogGroupPage {
                    groups: vec![record("/a", "arn-a")],
                    next_token: Some("loop".to_string()),
                },
            )
            .with_page(
                Some("loop"),
                LogGroupPage {
                    groups: vec![record("/a", "arn-a")],
                    next_token: Some("loop".to_string()),
                },
            );

        let err = LogGroupResolver::new(&sim)
            .with_max_pages(5)
            .resolve("/x")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CompileError::PageLimit {
                log_group: "/x".to_string(),
                pages: 5,
            }
        );
        assert_eq!(sim.log_group_calls(), 5);
    }

    #[tokio::test]
    async fn test_provider_error_propagates_verbatim() {
        let sim = SimLogDelivery::new().fail_log_groups_with(
            logwire_provider::ProviderError::Connection("refused".to_string()),
        );
        let err = LogGroupResolver::new(&sim).resolve("/a").await.unwrap_err();
        assert_eq!(
            err,
            CompileError::Provider(logwire_provider::ProviderError::Connection(
                "refused".to_string()
            ))
        );
    }
}
