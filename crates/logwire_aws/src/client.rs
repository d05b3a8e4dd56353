//! CloudWatch Logs implementation of the log delivery API.

use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::Client;
use aws_sdk_cloudwatchlogs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use logwire_provider::{LogDelivery, LogGroupPage, LogGroupRecord, ProviderError, SubscriptionRecord};

/// [`LogDelivery`] over the CloudWatch Logs API.
#[derive(Debug, Clone)]
pub struct AwsLogDelivery {
    client: Client,
}

impl AwsLogDelivery {
    /// Create from a shared AWS configuration.
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Create from an already-built CloudWatch Logs client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogDelivery for AwsLogDelivery {
    #[tracing::instrument(skip(self))]
    async fn subscriptions(
        &self,
        log_group_name: &str,
    ) -> Result<Vec<SubscriptionRecord>, ProviderError> {
        let resp = self
            .client
            .describe_subscription_filters()
            .log_group_name(log_group_name)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(resp
            .subscription_filters()
            .iter()
            .filter_map(|filter| {
                filter.destination_arn().map(|arn| SubscriptionRecord {
                    destination_arn: arn.to_string(),
                    filter_name: filter.filter_name().map(str::to_string),
                })
            })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn log_groups(
        &self,
        name_prefix: &str,
        next_token: Option<String>,
    ) -> Result<LogGroupPage, ProviderError> {
        let resp = self
            .client
            .describe_log_groups()
            .log_group_name_prefix(name_prefix)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(LogGroupPage {
            groups: resp
                .log_groups()
                .iter()
                .filter_map(|group| match (group.log_group_name(), group.arn()) {
                    (Some(name), Some(arn)) => Some(LogGroupRecord {
                        name: name.to_string(),
                        id: arn.to_string(),
                    }),
                    _ => None,
                })
                .collect(),
            next_token: resp.next_token().map(str::to_string),
        })
    }
}

/// Map an SDK failure to a provider error, preserving the full error
/// context in the message.
pub(crate) fn map_sdk_error<E>(err: SdkError<E>) -> ProviderError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let code = err.code().map(str::to_string);
    let message = DisplayErrorContext(err).to_string();
    match code.as_deref() {
        Some("ThrottlingException") => ProviderError::Throttled(message),
        Some("AccessDeniedException" | "AccessDenied") => ProviderError::AccessDenied(message),
        _ => ProviderError::Api(message),
    }
}
