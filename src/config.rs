use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct CargoToml {
    pub package: Package,
}

#[derive(Debug, Deserialize)]
pub struct Package {
    pub name: String,
}

/// Resolve the project name used in the archive name.
///
/// Precedence: explicit value (--project-name flag or PROJECT_NAME
/// environment variable, both handled by clap) over `package.name` in the
/// Cargo.toml next to the input files. With neither available the run
/// aborts with a configuration error.
pub fn resolve_project_name(ctx: &Context, explicit: Option<String>) -> Result<String> {
    if let Some(name) = explicit {
        if name.is_empty() {
            return Err(Error::ConfigMissing);
        }
        return Ok(name);
    }

    let manifest_path = ctx.base_dir.join("Cargo.toml");
    if manifest_path.is_file() {
        let content = fs::read_to_string(&manifest_path)?;
        let cargo_toml: CargoToml = toml::from_str(&content)
            .map_err(|e| Error::InvalidManifest(manifest_path.display().to_string(), e))?;
        return Ok(cargo_toml.package.name);
    }

    Err(Error::ConfigMissing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_in(dir: &std::path::Path) -> Context {
        Context::new(dir.to_path_buf(), None, false)
    }

    #[test]
    fn test_explicit_name_wins() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            "[package]\nname = \"other\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let name = resolve_project_name(&ctx_in(tmp.path()), Some("pack".into())).unwrap();
        assert_eq!(name, "pack");
    }

    #[test]
    fn test_falls_back_to_cargo_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            "[package]\nname = \"pack\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let name = resolve_project_name(&ctx_in(tmp.path()), None).unwrap();
        assert_eq!(name, "pack");
    }

    #[test]
    fn test_missing_everywhere_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_project_name(&ctx_in(tmp.path()), None).unwrap_err();
        assert!(matches!(err, Error::ConfigMissing));
    }

    #[test]
    fn test_unparseable_manifest_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Cargo.toml"), "not toml at all [").unwrap();

        let err = resolve_project_name(&ctx_in(tmp.path()), None).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest(_, _)));
    }
}
