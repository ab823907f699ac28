//! Build-environment contribution for runs.

use std::collections::BTreeMap;

use crate::domain::DisplayUrlError;
use crate::ports::{DisplayUrlProvider, Run};

/// Environment variable carrying the run's artifact listing URL.
pub const RUN_ARTIFACTS_DISPLAY_URL: &str = "RUN_ARTIFACTS_DISPLAY_URL";

/// Environment variable carrying the run's test results URL.
pub const RUN_TESTS_DISPLAY_URL: &str = "RUN_TESTS_DISPLAY_URL";

/// Exposes deep links for `run` to downstream build steps.
///
/// Inserts [`RUN_ARTIFACTS_DISPLAY_URL`] and [`RUN_TESTS_DISPLAY_URL`] into
/// `env`, overwriting earlier values. The host's environment-contribution
/// machinery calls this once per run while assembling the build
/// environment.
pub fn contribute_run_environment(
    provider: &dyn DisplayUrlProvider,
    run: &dyn Run,
    env: &mut BTreeMap<String, String>,
) -> Result<(), DisplayUrlError> {
    env.insert(RUN_TESTS_DISPLAY_URL.to_string(), provider.tests_url(run)?);
    env.insert(RUN_ARTIFACTS_DISPLAY_URL.to_string(), provider.artifacts_url(run)?);
    Ok(())
}
