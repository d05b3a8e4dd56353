//! Typed resource fragments for the compiled template.
//!
//! Fragments are structured data end to end. User-supplied strings such as
//! filter patterns are never spliced into text templates; JSON delimiter
//! escaping happens in serde serialization and round-trips losslessly.

use serde::{Deserialize, Serialize};

use crate::naming::LogicalId;

/// Action granted by an invoke permission.
pub const INVOKE_ACTION: &str = "invoke";

/// Principal of the log delivery service in a region.
#[must_use]
pub fn log_delivery_principal(region: &str) -> String {
    format!("log-delivery.{region}")
}

/// One resource definition for the compiled template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Resource {
    /// Grants the log delivery principal the right to invoke a function,
    /// scoped to a single log source.
    #[serde(rename = "Invoke-Permission")]
    Permission {
        /// Permission properties.
        #[serde(rename = "Properties")]
        properties: PermissionProperties,
    },

    /// Routes matching records from a log source to a function. Must not
    /// be created before its permission exists.
    #[serde(rename = "Log-Subscription")]
    Subscription {
        /// Subscription properties.
        #[serde(rename = "Properties")]
        properties: SubscriptionProperties,
        /// Logical ID of the permission this subscription depends on.
        #[serde(rename = "DependsOn")]
        depends_on: LogicalId,
    },
}

impl Resource {
    /// Logical ID of the resource this one depends on, if any.
    #[must_use]
    pub fn depends_on(&self) -> Option<&LogicalId> {
        match self {
            Self::Permission { .. } => None,
            Self::Subscription { depends_on, .. } => Some(depends_on),
        }
    }
}

/// Properties of an invoke permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionProperties {
    /// Template logical ID of the function being granted to.
    #[serde(rename = "FunctionRef")]
    pub function_ref: String,
    /// Granted action, always [`INVOKE_ACTION`].
    #[serde(rename = "Action")]
    pub action: String,
    /// Regional log delivery principal.
    #[serde(rename = "Principal")]
    pub principal: String,
    /// Permanent identifier of the one log source allowed to invoke.
    /// Never a wildcard.
    #[serde(rename = "SourceArn")]
    pub source_arn: String,
}

/// Properties of a log subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionProperties {
    /// Runtime identifier of the destination function.
    #[serde(rename = "DestinationArn")]
    pub destination_arn: String,
    /// Pattern selecting which log records are delivered.
    #[serde(rename = "FilterPattern")]
    pub filter_pattern: String,
    /// Name of the subscribed log source.
    #[serde(rename = "LogGroupName")]
    pub log_group_name: String,
    /// Optional explicit subscription name.
    #[serde(rename = "FilterName", skip_serializing_if = "Option::is_none", default)]
    pub filter_name: Option<String>,
}

/// A named resource fragment prior to its merge into the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Logical ID naming the resource in the template.
    pub logical_id: LogicalId,
    /// The resource definition.
    pub resource: Resource,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription_fragment(pattern: &str) -> Fragment {
        Fragment {
            logical_id: LogicalId::subscription("foo", "/svc/x"),
            resource: Resource::Subscription {
                properties: SubscriptionProperties {
                    destination_arn: "fn-arn-1".to_string(),
                    filter_pattern: pattern.to_string(),
                    log_group_name: "/svc/x".to_string(),
                    filter_name: None,
                },
                depends_on: LogicalId::permission("foo", "/svc/x"),
            },
        }
    }

    #[test]
    fn test_permission_serializes_with_type_tag() {
        let resource = Resource::Permission {
            properties: PermissionProperties {
                function_ref: "FooFunction".to_string(),
                action: INVOKE_ACTION.to_string(),
                principal: log_delivery_principal("eu-west-1"),
                source_arn: "lg-arn-1".to_string(),
            },
        };
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["Type"], "Invoke-Permission");
        assert_eq!(value["Properties"]["Action"], "invoke");
        assert_eq!(value["Properties"]["Principal"], "log-delivery.eu-west-1");
        assert_eq!(value["Properties"]["SourceArn"], "lg-arn-1");
    }

    #[test]
    fn test_subscription_serializes_dependency() {
        let value = serde_json::to_value(subscription_fragment("ERROR").resource).unwrap();
        assert_eq!(value["Type"], "Log-Subscription");
        assert_eq!(value["DependsOn"], "FooInvokePermissionSvcx");
        assert!(value["Properties"].get("FilterName").is_none());
    }

    #[test]
    fn test_filter_pattern_round_trips_through_json() {
        let fragment = subscription_fragment(r#"ERROR "timeout""#);
        let text = serde_json::to_string(&fragment).unwrap();
        // The delimiter is escaped in the serialized form.
        assert!(text.contains(r#"ERROR \"timeout\""#));

        let parsed: Fragment = serde_json::from_str(&text).unwrap();
        match parsed.resource {
            Resource::Subscription { properties, .. } => {
                assert_eq!(properties.filter_pattern, r#"ERROR "timeout""#);
            }
            Resource::Permission { .. } => panic!("expected subscription"),
        }
    }
}
