mod hierarchy;
mod host;
mod organizations;
mod provider;

pub use hierarchy::{Item, Run};
pub use host::HostRuntime;
pub use organizations::OrganizationSource;
pub use provider::DisplayUrlProvider;
