//! The closed sets of job and run kinds Blue Ocean renders natively.
//!
//! Kinds are matched on the fully-qualified identifier the host's remote API
//! exposes, so optional integrations (Maven) participate without their kinds
//! being linkable here. Matching is exact; subtypes of a listed kind do not
//! qualify. Anything outside these sets routes to the fallback provider.

/// Job kinds with a native Blue Ocean rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Scripted or declarative pipeline job.
    Pipeline,
    /// Container generating one pipeline job per source-control branch.
    MultiBranch,
    /// Classic freestyle project.
    Freestyle,
    /// Maven module set (optional host integration).
    Maven,
}

impl JobKind {
    /// All supported job kinds.
    pub const ALL: [JobKind; 4] =
        [JobKind::Pipeline, JobKind::MultiBranch, JobKind::Freestyle, JobKind::Maven];

    /// Resolve a host kind identifier to a supported job kind.
    pub fn from_kind_name(name: &str) -> Option<JobKind> {
        match name {
            "org.jenkinsci.plugins.workflow.job.WorkflowJob" => Some(JobKind::Pipeline),
            "jenkins.branch.MultiBranchProject" => Some(JobKind::MultiBranch),
            "hudson.model.FreeStyleProject" => Some(JobKind::Freestyle),
            "hudson.maven.AbstractMavenProject" => Some(JobKind::Maven),
            _ => None,
        }
    }

    /// The host kind identifier this kind is resolved from.
    pub fn kind_name(&self) -> &'static str {
        match self {
            JobKind::Pipeline => "org.jenkinsci.plugins.workflow.job.WorkflowJob",
            JobKind::MultiBranch => "jenkins.branch.MultiBranchProject",
            JobKind::Freestyle => "hudson.model.FreeStyleProject",
            JobKind::Maven => "hudson.maven.AbstractMavenProject",
        }
    }
}

/// Run kinds with a native Blue Ocean rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Execution of a pipeline job.
    Pipeline,
    /// Execution of a freestyle project.
    Freestyle,
    /// Execution of a Maven module set.
    Maven,
}

impl RunKind {
    /// All supported run kinds.
    pub const ALL: [RunKind; 3] = [RunKind::Pipeline, RunKind::Freestyle, RunKind::Maven];

    /// Resolve a host kind identifier to a supported run kind.
    pub fn from_kind_name(name: &str) -> Option<RunKind> {
        match name {
            "org.jenkinsci.plugins.workflow.job.WorkflowRun" => Some(RunKind::Pipeline),
            "hudson.model.FreeStyleBuild" => Some(RunKind::Freestyle),
            "hudson.maven.AbstractMavenBuild" => Some(RunKind::Maven),
            _ => None,
        }
    }

    /// The host kind identifier this kind is resolved from.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RunKind::Pipeline => "org.jenkinsci.plugins.workflow.job.WorkflowRun",
            RunKind::Freestyle => "hudson.model.FreeStyleBuild",
            RunKind::Maven => "hudson.maven.AbstractMavenBuild",
        }
    }
}
