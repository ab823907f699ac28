use serde::{Deserialize, Serialize};

/// A named partition of the host's item tree.
///
/// Organizations present an alternate top-level grouping: item paths inside
/// an organization are computed relative to its base container instead of
/// the tree root. A container belongs to at most one organization; which
/// one, if any, is decided by the host's
/// [`OrganizationSource`](crate::ports::OrganizationSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Name rendered as the `organizations/<name>` URL segment.
    pub name: String,
    /// Full hierarchical name of the base container; `None` bases the
    /// organization at the tree root.
    pub base: Option<String>,
}

impl Organization {
    /// Organization based at the top of the item tree.
    pub fn at_root(name: impl Into<String>) -> Self {
        Self { name: name.into(), base: None }
    }

    /// Organization whose paths are relative to the container with the
    /// given full hierarchical name.
    pub fn based_at(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self { name: name.into(), base: Some(base.into()) }
    }
}
