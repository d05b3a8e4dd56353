//! LOGWIRE AWS Provider
//!
//! Binds the provider traits to CloudWatch Logs (subscription listing and
//! paginated log group search) and STS (account identity).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod identity;

pub use client::AwsLogDelivery;
pub use identity::AwsIdentity;

/// Build both providers from the ambient AWS environment.
pub async fn from_env() -> (AwsLogDelivery, AwsIdentity) {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    (AwsLogDelivery::new(&config), AwsIdentity::new(&config))
}
