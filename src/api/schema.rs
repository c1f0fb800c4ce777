use serde::Serialize;
use std::{fmt, str::FromStr};

/// Describes a single field of a Plutora resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub required: bool,
    /// The value is a name which must be resolved to a GUID via another API path.
    pub lookup: bool,
    /// Allowed literal values. Empty if unconstrained.
    pub values: &'static [&'static str],
}

impl FieldDescriptor {
    const fn new(
        name: &'static str,
        required: bool,
        lookup: bool,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            required,
            lookup,
            values,
        }
    }
}

const ACTIVE_INACTIVE: &[&str] = &["Active", "Inactive"];

const SYSTEM_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Name", true, false, &[]),
    FieldDescriptor::new("Vendor", true, false, &[]),
    FieldDescriptor::new("Status", true, false, ACTIVE_INACTIVE),
    FieldDescriptor::new("Organization", true, true, &[]),
    FieldDescriptor::new("Description", true, false, &[]),
];

const ENVIRONMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Name", true, false, &[]),
    FieldDescriptor::new("Description", false, false, &[]),
    FieldDescriptor::new("URL", false, false, &[]),
    FieldDescriptor::new("Vendor", true, false, &[]),
    FieldDescriptor::new("LinkedSystem", true, true, &[]),
    FieldDescriptor::new("EnvironmentMgr", false, false, &[]),
    FieldDescriptor::new("UsageWorkItem", true, true, &[]),
    FieldDescriptor::new("EnvironmentStatus", true, true, &[]),
    FieldDescriptor::new("Color", true, false, &[]),
    FieldDescriptor::new("IsSharedEnvironment", true, false, &[]),
    FieldDescriptor::new("hostName", false, false, &[]),
    FieldDescriptor::new("StackLayer", false, true, &[]),
    FieldDescriptor::new("StackLayerType", false, false, &[]),
    FieldDescriptor::new("ComponentName", false, false, &[]),
    FieldDescriptor::new("Version", false, false, &[]),
];

const RELEASE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("Identifier", true, false, &[]),
    FieldDescriptor::new("Name", true, false, &[]),
    FieldDescriptor::new("Summary", false, false, &[]),
    FieldDescriptor::new("ReleaseType", true, true, &[]),
    FieldDescriptor::new("Location", true, false, &[]),
    FieldDescriptor::new("ReleaseStatusType", true, true, ACTIVE_INACTIVE),
    FieldDescriptor::new("ReleaseRiskLevel", true, true, &[]),
    FieldDescriptor::new("ImplementationDate", true, false, &[]),
    FieldDescriptor::new("DisplayColor", true, false, &[]),
    FieldDescriptor::new("Organization", true, true, &[]),
    FieldDescriptor::new("Manager", true, true, &[]),
    FieldDescriptor::new("ParentRelease", false, true, &[]),
    FieldDescriptor::new(
        "PlutoraReleaseType",
        true,
        false,
        &["Enterprise", "Integrated", "Independent"],
    ),
    FieldDescriptor::new(
        "ReleaseProjectType",
        true,
        false,
        &["IsProject", "NotIsProject", "None"],
    ),
];

/// The resource kinds we carry field metadata for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Systems,
    Environments,
    Releases,
}

impl ResourceKind {
    pub fn all() -> [ResourceKind; 3] {
        [Self::Systems, Self::Environments, Self::Releases]
    }

    /// The ordered field table for this kind.
    pub fn fields(self) -> &'static [FieldDescriptor] {
        match self {
            Self::Systems => SYSTEM_FIELDS,
            Self::Environments => ENVIRONMENT_FIELDS,
            Self::Releases => RELEASE_FIELDS,
        }
    }

    /// The API path, which is also how the kind is named.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Systems => "systems",
            Self::Environments => "environments",
            Self::Releases => "releases",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|candidate| candidate.as_str() == kind)
            .ok_or_else(|| format!("unknown resource kind {kind:?}"))
    }
}
