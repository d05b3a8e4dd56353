//! LOGWIRE Core Types
//!
//! This crate contains pure types and logic with no I/O: the deployment
//! manifest consumed from the pipeline, subscription filter settings and
//! their validator, the naming service, typed resource fragments, and the
//! compiled template they merge into.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fragment;
pub mod manifest;
pub mod naming;
pub mod setting;
pub mod template;

// Re-exports
pub use fragment::{
    Fragment, PermissionProperties, Resource, SubscriptionProperties, INVOKE_ACTION,
    log_delivery_principal,
};
pub use manifest::{EventConfig, FunctionConfig, ServiceManifest};
pub use naming::{ConventionNaming, LogicalId, Naming, normalize};
pub use setting::{ConfigurationError, SubscriptionFilterSetting};
pub use template::CompiledTemplate;
