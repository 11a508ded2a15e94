use crate::error::Error;
use crate::result::Result;
use std::fmt;

/// Tag references arrive from CI as fully qualified refs.
const TAG_REF_PREFIX: &str = "refs/tags/";

/// Name of a release artifact: `{project}-{version}-{target}`.
///
/// The version is derived from a git reference by stripping the
/// `refs/tags/` prefix when present; any other reference is used
/// verbatim (nightly builds pass a branch name or commit-ish here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseName {
    project: String,
    version: String,
    target: String,
}

impl ReleaseName {
    pub fn new(project: &str, git_ref: &str, target: &str) -> Result<Self> {
        let version = git_ref.strip_prefix(TAG_REF_PREFIX).unwrap_or(git_ref);

        if project.is_empty() {
            return Err(Error::InvalidReleaseName("project name is empty".into()));
        }
        if version.is_empty() {
            return Err(Error::InvalidReleaseName("release reference is empty".into()));
        }
        if target.is_empty() {
            return Err(Error::InvalidReleaseName("target triple is empty".into()));
        }

        Ok(Self {
            project: project.to_string(),
            version: version.to_string(),
            target: target.to_string(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// File name of the archive this release is packaged into
    pub fn archive_file_name(&self) -> String {
        format!("{}.tar.gz", self)
    }
}

impl fmt::Display for ReleaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.project, self.version, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ref_is_stripped() {
        let name = ReleaseName::new("pack", "refs/tags/v2.0.0", "x86_64-apple-darwin").unwrap();
        assert_eq!(name.version(), "v2.0.0");
        assert_eq!(
            name.archive_file_name(),
            "pack-v2.0.0-x86_64-apple-darwin.tar.gz"
        );
    }

    #[test]
    fn test_plain_ref_used_verbatim() {
        let name = ReleaseName::new("pack", "nightly", "x86_64-unknown-linux-gnu").unwrap();
        assert_eq!(name.version(), "nightly");
        assert_eq!(name.to_string(), "pack-nightly-x86_64-unknown-linux-gnu");
    }

    #[test]
    fn test_prefix_only_stripped_at_start() {
        let name = ReleaseName::new("pack", "feature/refs/tags/x", "aarch64-apple-darwin").unwrap();
        assert_eq!(name.version(), "feature/refs/tags/x");
    }

    #[test]
    fn test_empty_parts_rejected() {
        assert!(ReleaseName::new("", "v1.0.0", "x86_64-unknown-linux-gnu").is_err());
        assert!(ReleaseName::new("pack", "", "x86_64-unknown-linux-gnu").is_err());
        assert!(ReleaseName::new("pack", "v1.0.0", "").is_err());
        // A ref that is nothing but the prefix leaves an empty version
        assert!(ReleaseName::new("pack", "refs/tags/", "x86_64-unknown-linux-gnu").is_err());
    }
}
