//! Host application runtime state.

/// Runtime state of the host application the provider is embedded in.
pub trait HostRuntime {
    /// Whether the host finished starting.
    fn is_ready(&self) -> bool;

    /// Externally reachable base URL configured by an administrator, e.g.
    /// `http://ci.example.com/jenkins/`; `None` until one is set.
    fn base_url(&self) -> Option<String>;
}
