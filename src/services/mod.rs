mod blue_ocean;
mod encoding;
mod environment;
mod organizations;
mod relative_name;

pub use blue_ocean::{BlueOceanDisplayUrl, UNCONFIGURED_HOST_URL};
pub use encoding::{encode_relative_path, encode_segment};
pub use environment::{
    RUN_ARTIFACTS_DISPLAY_URL, RUN_TESTS_DISPLAY_URL, contribute_run_environment,
};
pub use organizations::DefaultOrganizationSource;
pub use relative_name::{name_chain, relative_segments};
