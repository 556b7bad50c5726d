//! Host platform classification

use serde::Serialize;
use std::fmt;

/// Operating system family the installers know how to drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", content = "name", rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    Darwin,
    /// Anything else, keeping the identifier that was reported
    Unsupported(String),
}

impl Platform {
    /// Classify the platform this binary was built for.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Classify a platform identifier such as `Windows`, `Linux` or `Darwin`.
    ///
    /// Matching is case-insensitive and also accepts the Rust target names
    /// (`windows`, `linux`, `macos`).
    pub fn from_identifier(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "darwin" | "macos" => Platform::Darwin,
            _ => Platform::Unsupported(trimmed.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::Darwin => "Darwin",
            Platform::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
