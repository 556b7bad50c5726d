//! Loading the optional user configuration file

use crate::defaults::{DEFAULT_PROFILES, merge_with_defaults};
use crate::error_utils::create_named_source;
use crate::models::ProfileConfig;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "depstrap.yml";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file {}", .path.display())]
    #[diagnostic(code(depstrap::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in config file")]
    #[diagnostic(code(depstrap::config::syntax))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        reason: String,
    },

    #[error("Config file {} does not describe installer profiles", .path.display())]
    #[diagnostic(
        code(depstrap::config::schema),
        help("Valid keys are local.{{windows,other}} and virtual.{{windows,linux,darwin}}, each with check, bootstrap, install, requirements, setup_script and extra_instructions")
    )]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Resolve the installer profiles.
///
/// An explicitly requested file must exist. Without one, `depstrap.yml` in
/// the working directory is used if present, otherwise the built-in defaults.
pub fn load_profiles(explicit: Option<&Path>) -> Result<ProfileConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("No {DEFAULT_CONFIG_FILE} found, using built-in profiles");
                return Ok(DEFAULT_PROFILES.clone());
            }
            candidate
        }
    };

    info!("Loading installer profiles from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_profiles(&path, content)
}

/// Parse override YAML and merge it onto the defaults.
pub fn parse_profiles(path: &Path, content: String) -> Result<ProfileConfig, ConfigError> {
    let overrides: serde_yaml::Value = match serde_yaml::from_str(&content) {
        Ok(value) => value,
        Err(error) => {
            let span = error
                .location()
                .map(|location| SourceSpan::from(location.index()));
            return Err(ConfigError::Syntax {
                src: create_named_source(path, content),
                span,
                reason: error.to_string(),
            });
        }
    };

    merge_with_defaults(overrides).map_err(|source| ConfigError::Schema {
        path: path.to_path_buf(),
        source,
    })
}
