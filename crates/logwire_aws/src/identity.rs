//! STS-backed account identity.

use async_trait::async_trait;
use aws_sdk_sts::Client;
use logwire_provider::{Identity, ProviderError};

use crate::client::map_sdk_error;

/// [`Identity`] over the STS caller identity API.
#[derive(Debug, Clone)]
pub struct AwsIdentity {
    client: Client,
}

impl AwsIdentity {
    /// Create from a shared AWS configuration.
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl Identity for AwsIdentity {
    #[tracing::instrument(skip(self))]
    async fn account_id(&self) -> Result<String, ProviderError> {
        let resp = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(map_sdk_error)?;

        resp.account().map(str::to_string).ok_or_else(|| {
            ProviderError::Api("caller identity response missing account id".to_string())
        })
    }
}
