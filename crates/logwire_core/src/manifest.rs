//! Deployment manifest consumed from the deployment pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The deployment being compiled: service identity, active stage, and the
/// functions with their event descriptors. Read once per compile run from
/// immutable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceManifest {
    /// Service name.
    pub service: String,
    /// Active deployment stage.
    pub stage: String,
    /// Deployment region.
    pub region: String,
    /// Functions by logical name, in declaration order.
    #[serde(default)]
    pub functions: IndexMap<String, FunctionConfig>,
}

impl ServiceManifest {
    /// Create a manifest with no functions.
    #[must_use]
    pub fn new(
        service: impl Into<String>,
        stage: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            stage: stage.into(),
            region: region.into(),
            functions: IndexMap::new(),
        }
    }

    /// Add a function to the manifest.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>, config: FunctionConfig) -> Self {
        self.functions.insert(name.into(), config);
        self
    }
}

/// Configuration of one deployable function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Ordered event descriptors attached to the function.
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

impl FunctionConfig {
    /// Create a function with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an event descriptor.
    #[must_use]
    pub fn with_event(mut self, event: EventConfig) -> Self {
        self.events.push(event);
        self
    }
}

/// One event descriptor. Only the `subscriptionFilter` field is interpreted
/// by this compiler; other event kinds pass through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventConfig {
    /// Raw subscription filter configuration, validated later.
    #[serde(
        rename = "subscriptionFilter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_filter: Option<Value>,
    /// Fields belonging to other event kinds.
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

impl EventConfig {
    /// An event descriptor carrying a raw `subscriptionFilter` value.
    #[must_use]
    pub fn subscription_filter(raw: Value) -> Self {
        Self {
            subscription_filter: Some(raw),
            other: IndexMap::new(),
        }
    }
}
