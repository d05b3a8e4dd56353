//! LOGWIRE Provider Abstraction
//!
//! Async traits over the cloud provider's log delivery API. The compile
//! pipeline only sees these traits; production code binds them to a real
//! provider, tests bind them to scripted doubles.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod error;

pub use api::{Identity, LogDelivery, LogGroupPage, LogGroupRecord, SubscriptionRecord};
pub use error::ProviderError;
