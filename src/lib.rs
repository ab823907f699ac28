//! Organization-aware deep links into the Blue Ocean UI of a Jenkins-like
//! CI host.
//!
//! Given a job or a run inside the host's tree of folders and multi-branch
//! projects, [`BlueOceanDisplayUrl`] produces the URL the Blue Ocean web UI
//! uses to display it, including nested-folder paths, multi-branch branch
//! names, and pluggable organization namespaces that group jobs differently
//! than the underlying folder tree.
//!
//! The host owns everything: the item tree ([`Item`], [`Run`]), the
//! organization mapping ([`OrganizationSource`]), its own runtime state
//! ([`HostRuntime`]), and a fallback [`DisplayUrlProvider`] that receives
//! every job or run outside the closed set of kinds Blue Ocean renders.
//! All of it is constructor-injected; this crate holds no state of its own
//! and every operation is a pure function of the hierarchy snapshot at call
//! time.

pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{DisplayUrlError, JobKind, Organization, RunKind};
pub use ports::{DisplayUrlProvider, HostRuntime, Item, OrganizationSource, Run};
pub use services::{
    BlueOceanDisplayUrl, DefaultOrganizationSource, RUN_ARTIFACTS_DISPLAY_URL,
    RUN_TESTS_DISPLAY_URL, UNCONFIGURED_HOST_URL, contribute_run_environment,
    encode_relative_path, encode_segment, name_chain, relative_segments,
};
