use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Commands and files used to set up dependencies on one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformProfile {
    /// Command that succeeds when the package manager is available
    pub check: String,

    /// Command that installs the package manager when the check fails
    pub bootstrap: String,

    /// Install command template. Per-package profiles substitute
    /// `{requirement}`, batch profiles substitute `{requirements}`.
    pub install: String,

    /// Dependency list file, relative to the working directory
    pub requirements: PathBuf,

    /// Optional script run after dependencies are installed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_script: Option<String>,

    /// Whether the platform needs manual follow-up steps printed at the end
    #[serde(default)]
    pub extra_instructions: bool,
}

/// Profiles for the per-package installer, which only tells Windows apart
/// from everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalProfiles {
    pub windows: PlatformProfile,
    pub other: PlatformProfile,
}

impl LocalProfiles {
    pub fn select(&self, platform: &Platform) -> &PlatformProfile {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Linux | Platform::Darwin | Platform::Unsupported(_) => &self.other,
        }
    }
}

/// Profiles for the batch installer, one per supported platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualProfiles {
    pub windows: PlatformProfile,
    pub linux: PlatformProfile,
    pub darwin: PlatformProfile,
}

impl VirtualProfiles {
    /// `None` when the platform is not supported by the batch installer.
    pub fn select(&self, platform: &Platform) -> Option<&PlatformProfile> {
        match platform {
            Platform::Windows => Some(&self.windows),
            Platform::Linux => Some(&self.linux),
            Platform::Darwin => Some(&self.darwin),
            Platform::Unsupported(_) => None,
        }
    }
}

/// Complete installer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub local: LocalProfiles,

    #[serde(rename = "virtual")]
    pub virtual_env: VirtualProfiles,
}
