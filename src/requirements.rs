//! Dependency list files
//!
//! One requirement specifier per line, e.g. `numpy>=1.2` or `requests`.
//! Entries are kept in file order and are neither deduplicated nor validated.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    spec: String,
}

impl Requirement {
    pub fn new(spec: impl Into<String>) -> Self {
        Self { spec: spec.into() }
    }

    /// The full specifier as written in the file
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Package name without its minimum-version constraint
    pub fn name(&self) -> &str {
        self.spec
            .split(">=")
            .next()
            .unwrap_or(&self.spec)
            .trim()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

pub fn parse_requirements(content: &str) -> Vec<Requirement> {
    // Editors on Windows often save these files with a byte order mark
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Requirement::new)
        .collect()
}

pub fn read_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read requirements file {}", path.display()))?;
    Ok(parse_requirements(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_file_order() {
        let reqs = parse_requirements("numpy>=1.2\nrequests\nnumpy>=1.2\n");
        let specs: Vec<_> = reqs.iter().map(Requirement::spec).collect();
        assert_eq!(specs, vec!["numpy>=1.2", "requests", "numpy>=1.2"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let reqs = parse_requirements("graphviz\r\n\r\n  pandas>=2.0  \r\n");
        assert_eq!(
            reqs,
            vec![Requirement::new("graphviz"), Requirement::new("pandas>=2.0")]
        );
    }

    #[test]
    fn test_parse_ignores_leading_byte_order_mark() {
        let reqs = parse_requirements("\u{feff}graphviz\nrequests\n");
        assert_eq!(reqs[0].spec(), "graphviz");
        assert_eq!(reqs[0].name(), "graphviz");
        assert_eq!(reqs.len(), 2);
    }

    #[test]
    fn test_name_strips_minimum_version() {
        assert_eq!(Requirement::new("numpy>=1.2").name(), "numpy");
        assert_eq!(Requirement::new("requests").name(), "requests");
        assert_eq!(Requirement::new("scipy >= 1.10").name(), "scipy");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_requirements(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
