//! Read-only views of the host's item tree.
//!
//! The host owns and mutates the tree; these traits expose just the slice
//! of it that URL computation reads. Nothing is retained beyond a single
//! call.

/// One node of the host's item tree: a folder, a multi-branch project, or a
/// job.
///
/// The tree is acyclic and rooted at a single parentless node whose name
/// never appears in computed paths.
pub trait Item {
    /// Stable name, unique within the parent container.
    fn name(&self) -> &str;

    /// Human-facing name; may differ from [`name`](Item::name) and may
    /// contain characters that need encoding. URL construction never uses
    /// it.
    fn display_name(&self) -> &str;

    /// Fully-qualified kind identifier as exposed by the host's remote API,
    /// e.g. `org.jenkinsci.plugins.workflow.job.WorkflowJob`.
    fn kind_name(&self) -> &str;

    /// Enclosing container, or `None` at the tree root.
    fn parent(&self) -> Option<&dyn Item>;

    /// Whether this container's child jobs are generated one per
    /// source-control branch.
    fn is_multibranch(&self) -> bool;
}

/// One numbered execution of a job.
pub trait Run {
    /// Fully-qualified kind identifier of this run.
    fn kind_name(&self) -> &str;

    /// The job this run executed.
    fn job(&self) -> &dyn Item;

    /// 1-based run number, unique per job and immutable once created.
    fn number(&self) -> u32;
}
