use thiserror::Error;

/// Library-wide error type for display-URL operations.
#[derive(Debug, Error)]
pub enum DisplayUrlError {
    /// The root URL was requested before the host application finished
    /// starting.
    ///
    /// Unlike an unset base URL, which is substituted with a sentinel, this
    /// is a startup-ordering fault and must propagate to the caller.
    #[error("host application has not finished starting; no root URL is available yet")]
    HostNotReady,
}
