//! Subscription filter settings and their validator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Malformed or incomplete subscription filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The `subscriptionFilter` value is not an object.
    #[error("subscriptionFilter must be an object")]
    NotAnObject,

    /// A required field is absent or empty.
    #[error("subscriptionFilter requires a non-empty string `{0}`")]
    MissingField(&'static str),

    /// A field carries a non-string value.
    #[error("subscriptionFilter field `{0}` must be a string")]
    WrongType(&'static str),
}

/// Validated configuration of one subscription filter event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionFilterSetting {
    /// Deployment stage this filter applies to.
    pub stage: String,
    /// Name of the log source to subscribe to.
    #[serde(rename = "logGroupName")]
    pub log_group_name: String,
    /// Pattern selecting which log records are delivered.
    #[serde(rename = "filterPattern")]
    pub filter_pattern: String,
    /// Optional explicit name for the subscription.
    #[serde(rename = "filterName", skip_serializing_if = "Option::is_none", default)]
    pub filter_name: Option<String>,
}

impl SubscriptionFilterSetting {
    /// Validate the raw `subscriptionFilter` value of one event.
    ///
    /// Returns `Ok(None)` when the field is entirely absent (the event is
    /// not a subscription filter event and is ignored). Synchronous, no
    /// side effects.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the offending field when
    /// `stage`, `logGroupName`, or `filterPattern` is absent, empty, or
    /// not a string.
    pub fn from_event(raw: Option<&Value>) -> Result<Option<Self>, ConfigurationError> {
        let Some(value) = raw else {
            return Ok(None);
        };
        let obj = value.as_object().ok_or(ConfigurationError::NotAnObject)?;

        let stage = require_string(obj, "stage")?;
        let log_group_name = require_string(obj, "logGroupName")?;
        let filter_pattern = require_string(obj, "filterPattern")?;
        let filter_name = match obj.get("filterName") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(ConfigurationError::WrongType("filterName")),
        };

        Ok(Some(Self {
            stage,
            log_group_name,
            filter_pattern,
            filter_name,
        }))
    }
}

fn require_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ConfigurationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ConfigurationError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ConfigurationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ConfigurationError::WrongType(field)),
    }
}
