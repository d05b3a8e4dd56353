//! Deterministic naming for deploy targets and template resources.
//!
//! Logical IDs are pure functions of their inputs so that re-running the
//! compiler over unchanged configuration never produces duplicate or
//! renamed resources.

use serde::{Deserialize, Serialize};

/// Normalize an arbitrary string to an identifier-safe token.
///
/// Keeps ASCII alphanumerics only and capitalizes the leading character,
/// so `/svc/x-y` becomes `Svcxy`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().filter(char::is_ascii_alphanumeric) {
        if out.is_empty() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// A stable identifier naming one resource inside a compiled template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogicalId(String);

impl LogicalId {
    /// Logical ID for the invoke permission of `(function, log_group)`.
    #[must_use]
    pub fn permission(function: &str, log_group: &str) -> Self {
        Self(format!(
            "{}InvokePermission{}",
            normalize(function),
            normalize(log_group)
        ))
    }

    /// Logical ID for the log subscription of `(function, log_group)`.
    #[must_use]
    pub fn subscription(function: &str, log_group: &str) -> Self {
        Self(format!(
            "{}SubscriptionFilter{}",
            normalize(function),
            normalize(log_group)
        ))
    }

    /// View as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LogicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Naming service consumed by the compilation pipeline.
///
/// Maps logical function names to template identifiers and runtime
/// identifiers, and carries the active deployment context.
pub trait Naming: Send + Sync {
    /// Service name of the deployment.
    fn service(&self) -> &str;

    /// Active deployment stage.
    fn stage(&self) -> &str;

    /// Deployment region.
    fn region(&self) -> &str;

    /// Template logical ID of a deployed function.
    fn function_logical_id(&self, function: &str) -> String {
        format!("{}Function", normalize(function))
    }

    /// Fully-qualified runtime name of a function: `service-stage-function`.
    fn runtime_function_name(&self, function: &str) -> String {
        format!("{}-{}-{}", self.service(), self.stage(), function)
    }

    /// Permanent runtime identifier of a function under an account.
    fn runtime_id(&self, function: &str, account_id: &str) -> String {
        format!(
            "arn:aws:lambda:{}:{}:function:{}",
            self.region(),
            account_id,
            self.runtime_function_name(function)
        )
    }
}

/// Default convention-based naming for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionNaming {
    service: String,
    stage: String,
    region: String,
}

impl ConventionNaming {
    /// Create naming for a `(service, stage, region)` deployment context.
    #[must_use]
    pub fn new(service: impl Into<String>, stage: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            stage: stage.into(),
            region: region.into(),
        }
    }
}

impl From<&crate::manifest::ServiceManifest> for ConventionNaming {
    fn from(manifest: &crate::manifest::ServiceManifest) -> Self {
        Self::new(
            manifest.service.as_str(),
            manifest.stage.as_str(),
            manifest.region.as_str(),
        )
    }
}

impl Naming for ConventionNaming {
    fn service(&self) -> &str {
        &self.service
    }

    fn stage(&self) -> &str {
        &self.stage
    }

    fn region(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_and_capitalizes() {
        assert_eq!(normalize("hello"), "Hello");
        assert_eq!(normalize("/svc/x-y"), "Svcxy");
        assert_eq!(normalize("9lives"), "9lives");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_logical_id_shapes() {
        let id = LogicalId::permission("foo", "/svc/x");
        assert_eq!(id.as_str(), "FooInvokePermissionSvcx");

        let id = LogicalId::subscription("foo", "/svc/x");
        assert_eq!(id.as_str(), "FooSubscriptionFilterSvcx");
    }

    #[test]
    fn test_logical_id_changes_with_inputs() {
        let base = LogicalId::permission("foo", "/svc/x");
        assert_ne!(base, LogicalId::permission("bar", "/svc/x"));
        assert_ne!(base, LogicalId::permission("foo", "/svc/y"));
        assert_ne!(base, LogicalId::subscription("foo", "/svc/x"));
    }

    #[test]
    fn test_convention_naming() {
        let naming = ConventionNaming::new("svc", "dev", "eu-west-1");
        assert_eq!(naming.function_logical_id("foo"), "FooFunction");
        assert_eq!(naming.runtime_function_name("foo"), "svc-dev-foo");
        assert_eq!(
            naming.runtime_id("foo", "123456789012"),
            "arn:aws:lambda:eu-west-1:123456789012:function:svc-dev-foo"
        );
    }

    proptest! {
        #[test]
        fn prop_normalize_identifier_safe(s in ".*") {
            let n = normalize(&s);
            prop_assert!(n.chars().all(|c| c.is_ascii_alphanumeric()));
        }

        #[test]
        fn prop_logical_id_deterministic(
            f in "[a-zA-Z][a-zA-Z0-9-]{0,19}",
            g in "[a-zA-Z/][a-zA-Z0-9/_-]{0,29}",
        ) {
            prop_assert_eq!(
                LogicalId::permission(&f, &g),
                LogicalId::permission(&f, &g)
            );
            prop_assert_eq!(
                LogicalId::subscription(&f, &g),
                LogicalId::subscription(&f, &g)
            );
        }
    }
}
