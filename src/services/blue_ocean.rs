//! The Blue Ocean display-URL provider.

use crate::domain::{DisplayUrlError, JobKind, Organization, RunKind};
use crate::ports::{DisplayUrlProvider, HostRuntime, Item, OrganizationSource, Run};
use crate::services::encoding::{encode_relative_path, encode_segment};
use crate::services::relative_name::relative_segments;

/// Placeholder base URL used while the host has no external URL configured.
pub const UNCONFIGURED_HOST_URL: &str = "http://unconfigured-jenkins-location/";

/// Computes Blue Ocean UI deep links for jobs and runs.
///
/// Collaborators are constructor-injected: the host runtime supplies the
/// base URL, an [`OrganizationSource`] resolves namespaces, and a fallback
/// [`DisplayUrlProvider`] receives every job or run this provider does not
/// render — an unsupported kind, or an item no organization claims. That
/// delegation is designed behavior, not an error; the only fatal condition
/// is asking for the root URL before the host finished starting.
///
/// Every operation is a pure function of the hierarchy snapshot at call
/// time; the provider holds no mutable state.
pub struct BlueOceanDisplayUrl<H, O, F> {
    host: H,
    organizations: O,
    fallback: F,
}

impl<H, O, F> BlueOceanDisplayUrl<H, O, F>
where
    H: HostRuntime,
    O: OrganizationSource,
    F: DisplayUrlProvider,
{
    /// Create a provider over the given collaborators.
    pub fn new(host: H, organizations: O, fallback: F) -> Self {
        Self { host, organizations, fallback }
    }

    /// Job page URL within `org`.
    ///
    /// A branch job of a multi-branch project contributes no path segment
    /// of its own: the organization path stops at the multi-branch
    /// container, and the branch surfaces only in the run-detail segment.
    fn org_job_url(&self, org: &Organization, job: &dyn Item) -> Result<String, DisplayUrlError> {
        let path_base = match job.parent() {
            Some(parent) if parent.is_multibranch() => parent,
            _ => job,
        };
        let segments = relative_segments(path_base, org.base.as_deref());
        Ok(format!(
            "{}organizations/{}/{}/",
            self.root()?,
            encode_segment(&org.name),
            encode_relative_path(&segments),
        ))
    }

    fn supports_run(&self, run: &dyn Run) -> bool {
        RunKind::from_kind_name(run.kind_name()).is_some()
    }
}

impl<H, O, F> DisplayUrlProvider for BlueOceanDisplayUrl<H, O, F>
where
    H: HostRuntime,
    O: OrganizationSource,
    F: DisplayUrlProvider,
{
    fn name(&self) -> &str {
        "blueocean"
    }

    fn display_name(&self) -> &str {
        "Blue Ocean"
    }

    fn root(&self) -> Result<String, DisplayUrlError> {
        if !self.host.is_ready() {
            return Err(DisplayUrlError::HostNotReady);
        }
        let mut base =
            self.host.base_url().unwrap_or_else(|| UNCONFIGURED_HOST_URL.to_string());
        if !base.ends_with('/') {
            base.push('/');
        }
        base.push_str("blue/");
        Ok(base)
    }

    fn job_url(&self, job: &dyn Item) -> Result<String, DisplayUrlError> {
        if JobKind::from_kind_name(job.kind_name()).is_none() {
            tracing::debug!(kind = job.kind_name(), "job kind has no Blue Ocean rendering");
            return self.fallback.job_url(job);
        }
        match self.organizations.containing_org(job) {
            Some(org) => self.org_job_url(&org, job),
            None => {
                tracing::debug!(job = job.name(), "no organization claims job");
                self.fallback.job_url(job)
            }
        }
    }

    fn run_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        if !self.supports_run(run) {
            tracing::debug!(kind = run.kind_name(), "run kind has no Blue Ocean rendering");
            return self.fallback.run_url(run);
        }
        let job = run.job();
        let Some(org) = self.organizations.containing_org(job) else {
            tracing::debug!(job = job.name(), "no organization claims run's job");
            return self.fallback.run_url(run);
        };
        let job_url = self.org_job_url(&org, job)?;
        Ok(format!("{}detail/{}/{}/", job_url, encode_segment(job.name()), run.number()))
    }

    fn artifacts_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        if self.supports_run(run) {
            Ok(format!("{}artifacts", self.run_url(run)?))
        } else {
            self.fallback.artifacts_url(run)
        }
    }

    fn changes_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        if self.supports_run(run) {
            Ok(format!("{}changes", self.run_url(run)?))
        } else {
            self.fallback.changes_url(run)
        }
    }

    fn tests_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        if self.supports_run(run) {
            Ok(format!("{}tests", self.run_url(run)?))
        } else {
            self.fallback.tests_url(run)
        }
    }
}
