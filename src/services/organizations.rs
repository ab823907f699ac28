//! Built-in organization sources.

use crate::domain::Organization;
use crate::ports::{Item, OrganizationSource};

/// The unconfigured state: one implicit organization claiming every item,
/// based at the tree root.
///
/// Hosts with a real organization layer plug in their own
/// [`OrganizationSource`]; this one reproduces the classic single-tenant
/// grouping under the host's traditional name.
#[derive(Debug, Clone)]
pub struct DefaultOrganizationSource {
    name: String,
}

impl DefaultOrganizationSource {
    /// Name of the implicit organization when none is configured.
    pub const DEFAULT_NAME: &'static str = "jenkins";

    /// Single root-based organization with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for DefaultOrganizationSource {
    fn default() -> Self {
        Self::named(Self::DEFAULT_NAME)
    }
}

impl OrganizationSource for DefaultOrganizationSource {
    fn containing_org(&self, _item: &dyn Item) -> Option<Organization> {
        Some(Organization::at_root(self.name.clone()))
    }
}
