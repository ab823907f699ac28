//! Display-URL provider contract.

use crate::domain::DisplayUrlError;
use crate::ports::{Item, Run};

/// Produces browser-facing URLs for jobs and runs.
///
/// The Blue Ocean implementation and the classic provider it delegates to
/// both satisfy this contract, which is what lets one provider be handed
/// another as its fallback collaborator.
pub trait DisplayUrlProvider {
    /// Stable provider identifier.
    fn name(&self) -> &str;

    /// Human-facing provider name.
    fn display_name(&self) -> &str;

    /// Base URL every other operation builds on.
    fn root(&self) -> Result<String, DisplayUrlError>;

    /// URL of the page displaying `job`.
    fn job_url(&self, job: &dyn Item) -> Result<String, DisplayUrlError>;

    /// URL of the page displaying `run`.
    fn run_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError>;

    /// URL of the artifact listing for `run`.
    fn artifacts_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError>;

    /// URL of the change list for `run`.
    fn changes_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError>;

    /// URL of the test results for `run`.
    fn tests_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError>;
}
