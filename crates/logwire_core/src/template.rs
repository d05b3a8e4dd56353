//! The compiled deployment template fragments merge into.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::fragment::{Fragment, Resource};
use crate::naming::LogicalId;

/// A deployment template resource map, append-only during a compile run.
///
/// Owned and persisted by the external deployment pipeline; this core only
/// merges fragments into it. Logical IDs are deterministic, so a duplicate
/// insert can only re-assert an identical resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompiledTemplate {
    /// Mapping from logical ID to resource definition.
    #[serde(rename = "Resources")]
    pub resources: IndexMap<LogicalId, Resource>,
}

impl CompiledTemplate {
    /// Create an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a set of fragments into the template.
    pub fn merge(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            self.resources.insert(fragment.logical_id, fragment.resource);
        }
    }

    /// Look up a resource by logical ID.
    #[must_use]
    pub fn get(&self, id: &LogicalId) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Number of resources in the template.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the template holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
