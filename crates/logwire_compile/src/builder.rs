//! Deterministic construction of the two resource fragments per event.

use logwire_core::{
    Fragment, LogicalId, Naming, PermissionProperties, Resource, SubscriptionFilterSetting,
    SubscriptionProperties, INVOKE_ACTION, log_delivery_principal,
};

/// Builds the permission and subscription fragments for one validated
/// event. Same inputs always produce byte-identical fragments.
pub struct FragmentBuilder<'a> {
    naming: &'a dyn Naming,
}

impl<'a> FragmentBuilder<'a> {
    /// Create a builder over the naming service.
    #[must_use]
    pub fn new(naming: &'a dyn Naming) -> Self {
        Self { naming }
    }

    /// Build both fragments: the invoke permission scoped to the resolved
    /// log source, and the subscription depending on that permission.
    ///
    /// The dependency edge is load-bearing: the subscription must not be
    /// created before the permission exists, or activation fails at
    /// deploy time.
    #[must_use]
    pub fn build(
        &self,
        setting: &SubscriptionFilterSetting,
        function: &str,
        function_runtime_id: &str,
        log_group_id: &str,
    ) -> Vec<Fragment> {
        let permission_id = LogicalId::permission(function, &setting.log_group_name);
        let subscription_id = LogicalId::subscription(function, &setting.log_group_name);

        let permission = Fragment {
            logical_id: permission_id.clone(),
            resource: Resource::Permission {
                properties: PermissionProperties {
                    function_ref: self.naming.function_logical_id(function),
                    action: INVOKE_ACTION.to_string(),
                    principal: log_delivery_principal(self.naming.region()),
                    source_arn: log_group_id.to_string(),
                },
            },
        };

        let subscription = Fragment {
            logical_id: subscription_id,
            resource: Resource::Subscription {
                properties: SubscriptionProperties {
                    destination_arn: function_runtime_id.to_string(),
                    filter_pattern: setting.filter_pattern.clone(),
                    log_group_name: setting.log_group_name.clone(),
                    filter_name: setting.filter_name.clone(),
                },
                depends_on: permission_id,
            },
        };

        vec![permission, subscription]
    }
}
