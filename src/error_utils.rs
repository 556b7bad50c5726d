//! Shared error utilities

use miette::NamedSource;
use std::path::Path;

/// Format a file path for error display
///
/// Paths under the working directory are shown relative to it.
pub fn format_error_path(path: &Path) -> String {
    let display_path = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf());
    display_path.display().to_string()
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    let formatted_path = format_error_path(path);
    NamedSource::new(formatted_path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_are_kept() {
        let formatted = format_error_path(Path::new("depstrap.yml"));
        assert_eq!(formatted, "depstrap.yml");
    }

    #[test]
    fn test_paths_under_cwd_become_relative() {
        let cwd = std::env::current_dir().unwrap();
        let formatted = format_error_path(&cwd.join("conf").join("depstrap.yml"));
        assert_eq!(
            formatted,
            Path::new("conf").join("depstrap.yml").display().to_string()
        );
    }
}
