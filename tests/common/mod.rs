//! Shared fixtures: an in-memory item tree and mock collaborators.
#![allow(dead_code)]

use std::cell::OnceCell;
use std::rc::Rc;

use blueocean_display_url::{
    BlueOceanDisplayUrl, DefaultOrganizationSource, DisplayUrlError, DisplayUrlProvider,
    HostRuntime, Item, JobKind, Organization, OrganizationSource, Run, RunKind, name_chain,
};

/// Base URL the mock host is configured with.
pub const BASE_URL: &str = "http://ci.example.com/jenkins/";

/// One node of an in-memory item tree standing in for the host hierarchy.
pub struct TestItem {
    name: String,
    display_name: OnceCell<String>,
    kind: String,
    multibranch: bool,
    parent: Option<Rc<TestItem>>,
}

impl TestItem {
    fn new(name: &str, kind: &str, multibranch: bool, parent: Option<Rc<TestItem>>) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            display_name: OnceCell::new(),
            kind: kind.to_string(),
            multibranch,
            parent,
        })
    }

    /// Give the item a human-facing name distinct from its stable name.
    pub fn set_display_name(&self, display_name: &str) {
        self.display_name.set(display_name.to_string()).expect("display name already set");
    }

    /// Slash-separated path from the tree root.
    pub fn full_name(&self) -> String {
        name_chain(self).join("/")
    }
}

impl Item for TestItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        self.display_name.get().map(String::as_str).unwrap_or(&self.name)
    }

    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn parent(&self) -> Option<&dyn Item> {
        self.parent.as_deref().map(|p| p as &dyn Item)
    }

    fn is_multibranch(&self) -> bool {
        self.multibranch
    }
}

/// The parentless tree root.
pub fn root() -> Rc<TestItem> {
    TestItem::new("", "hudson.model.Hudson", false, None)
}

/// A plain folder.
pub fn folder(parent: &Rc<TestItem>, name: &str) -> Rc<TestItem> {
    TestItem::new(name, "com.cloudbees.hudson.plugins.folder.Folder", false, Some(parent.clone()))
}

/// A freestyle project.
pub fn freestyle_project(parent: &Rc<TestItem>, name: &str) -> Rc<TestItem> {
    TestItem::new(name, JobKind::Freestyle.kind_name(), false, Some(parent.clone()))
}

/// A pipeline job.
pub fn pipeline_job(parent: &Rc<TestItem>, name: &str) -> Rc<TestItem> {
    TestItem::new(name, JobKind::Pipeline.kind_name(), false, Some(parent.clone()))
}

/// A Maven module set, whose kind only exists as an identifier string.
pub fn maven_project(parent: &Rc<TestItem>, name: &str) -> Rc<TestItem> {
    TestItem::new(name, JobKind::Maven.kind_name(), false, Some(parent.clone()))
}

/// A multi-branch container.
pub fn multibranch_project(parent: &Rc<TestItem>, name: &str) -> Rc<TestItem> {
    TestItem::new(name, JobKind::MultiBranch.kind_name(), true, Some(parent.clone()))
}

/// A per-branch pipeline job generated under a multi-branch container.
pub fn branch_job(project: &Rc<TestItem>, branch: &str) -> Rc<TestItem> {
    TestItem::new(branch, JobKind::Pipeline.kind_name(), false, Some(project.clone()))
}

/// A project of a kind Blue Ocean has no rendering for.
pub fn unsupported_project(parent: &Rc<TestItem>, name: &str) -> Rc<TestItem> {
    TestItem::new(name, "hudson.matrix.MatrixProject", false, Some(parent.clone()))
}

/// One numbered execution of a [`TestItem`] job.
pub struct TestRun {
    job: Rc<TestItem>,
    number: u32,
    kind: String,
}

impl TestRun {
    pub fn new(job: &Rc<TestItem>, number: u32, kind: &str) -> Self {
        Self { job: job.clone(), number, kind: kind.to_string() }
    }

    pub fn freestyle(job: &Rc<TestItem>, number: u32) -> Self {
        Self::new(job, number, RunKind::Freestyle.kind_name())
    }

    pub fn pipeline(job: &Rc<TestItem>, number: u32) -> Self {
        Self::new(job, number, RunKind::Pipeline.kind_name())
    }

    pub fn unsupported(job: &Rc<TestItem>, number: u32) -> Self {
        Self::new(job, number, "hudson.matrix.MatrixRun")
    }
}

impl Run for TestRun {
    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn job(&self) -> &dyn Item {
        self.job.as_ref()
    }

    fn number(&self) -> u32 {
        self.number
    }
}

/// Host runtime with scriptable readiness and base-URL configuration.
pub struct MockHost {
    ready: bool,
    base_url: Option<String>,
}

impl MockHost {
    pub fn configured(base_url: &str) -> Self {
        Self { ready: true, base_url: Some(base_url.to_string()) }
    }

    pub fn unconfigured() -> Self {
        Self { ready: true, base_url: None }
    }

    pub fn starting() -> Self {
        Self { ready: false, base_url: None }
    }
}

impl HostRuntime for MockHost {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn base_url(&self) -> Option<String> {
        self.base_url.clone()
    }
}

/// Organization claiming everything under one base folder, the way a
/// host-configured organization layer would.
pub struct FolderOrganizationSource {
    name: String,
    base: Rc<TestItem>,
}

impl FolderOrganizationSource {
    pub fn new(name: &str, base: &Rc<TestItem>) -> Self {
        Self { name: name.to_string(), base: base.clone() }
    }
}

impl OrganizationSource for FolderOrganizationSource {
    fn containing_org(&self, item: &dyn Item) -> Option<Organization> {
        let base_full = self.base.full_name();
        let item_full = name_chain(item).join("/");
        item_full
            .strip_prefix(&base_full)
            .filter(|rest| rest.starts_with('/'))
            .map(|_| Organization::based_at(self.name.clone(), base_full.clone()))
    }
}

/// Organization source with nothing configured; claims no item.
pub struct NoOrganizations;

impl OrganizationSource for NoOrganizations {
    fn containing_org(&self, _item: &dyn Item) -> Option<Organization> {
        None
    }
}

/// Stand-in for the classic URL provider. Outputs are recognizably distinct
/// from Blue Ocean URLs so delegation can be asserted verbatim.
pub struct ClassicFallback;

fn full_name_of(item: &dyn Item) -> String {
    name_chain(item).join("/")
}

impl DisplayUrlProvider for ClassicFallback {
    fn name(&self) -> &str {
        "classic"
    }

    fn display_name(&self) -> &str {
        "Classic"
    }

    fn root(&self) -> Result<String, DisplayUrlError> {
        Ok("classic:root".to_string())
    }

    fn job_url(&self, job: &dyn Item) -> Result<String, DisplayUrlError> {
        Ok(format!("classic:job:{}", full_name_of(job)))
    }

    fn run_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        Ok(format!("classic:run:{}:{}", full_name_of(run.job()), run.number()))
    }

    fn artifacts_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        Ok(format!("classic:artifacts:{}:{}", full_name_of(run.job()), run.number()))
    }

    fn changes_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        Ok(format!("classic:changes:{}:{}", full_name_of(run.job()), run.number()))
    }

    fn tests_url(&self, run: &dyn Run) -> Result<String, DisplayUrlError> {
        Ok(format!("classic:tests:{}:{}", full_name_of(run.job()), run.number()))
    }
}

/// Provider wired to the configured mock host, the implicit `jenkins`
/// organization, and the classic fallback.
pub fn blue_ocean_default()
-> BlueOceanDisplayUrl<MockHost, DefaultOrganizationSource, ClassicFallback> {
    BlueOceanDisplayUrl::new(
        MockHost::configured(BASE_URL),
        DefaultOrganizationSource::default(),
        ClassicFallback,
    )
}

/// Provider wired to the configured mock host and a custom organization
/// source.
pub fn blue_ocean_with_orgs<O: OrganizationSource>(
    organizations: O,
) -> BlueOceanDisplayUrl<MockHost, O, ClassicFallback> {
    BlueOceanDisplayUrl::new(MockHost::configured(BASE_URL), organizations, ClassicFallback)
}
