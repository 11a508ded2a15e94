use crate::context::Context;
use crate::error::Error;
use crate::release::ReleaseName;
use crate::result::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::Builder;

/// Files staged into a release archive
pub struct ReleaseFiles {
    /// The compiled release binary
    pub binary: PathBuf,

    /// Additional files shipped next to the binary (README etc.)
    pub extras: Vec<PathBuf>,
}

impl ReleaseFiles {
    /// Standard layout: binary at target/release/{project}, README.md
    /// beside the manifest.
    pub fn for_project(ctx: &Context, project: &str) -> Self {
        Self {
            binary: ctx
                .base_dir
                .join("target")
                .join("release")
                .join(project),
            extras: vec![ctx.base_dir.join("README.md")],
        }
    }

    fn all(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.binary).chain(self.extras.iter())
    }
}

/// Stage the release files into a fresh temporary directory and compress
/// them into `{name}.tar.gz` inside the output directory. Returns the
/// archive file name.
///
/// The staging directory is removed on every exit path, including archive
/// write failures, since it is owned by a `TempDir` guard.
pub fn build_release_archive(
    ctx: &Context,
    name: &ReleaseName,
    files: &ReleaseFiles,
) -> Result<String> {
    fs::create_dir_all(&ctx.output_dir).map_err(|source| Error::OutputDir {
        path: ctx.output_dir.display().to_string(),
        source,
    })?;

    let staging = tempfile::Builder::new().prefix("pack-dist-").tempdir()?;

    for src in files.all() {
        if !src.is_file() {
            return Err(Error::MissingInput(src.display().to_string()));
        }
        let file_name = src
            .file_name()
            .ok_or_else(|| Error::MissingInput(src.display().to_string()))?;
        let dst = staging.path().join(file_name);

        if ctx.verbose {
            println!("Staging {} -> {}", src.display(), dst.display());
        }
        fs::copy(src, &dst)?;
    }

    // Set executable permissions on the staged binary
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Some(bin_name) = files.binary.file_name() {
            let staged = staging.path().join(bin_name);
            let mut perms = fs::metadata(&staged)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&staged, perms)?;
        }
    }

    let archive_file = name.archive_file_name();
    let archive_path = ctx.output_dir.join(&archive_file);

    write_tar_gz(staging.path(), &archive_path).map_err(|source| Error::ArchiveWrite {
        path: archive_path.display().to_string(),
        source,
    })?;

    Ok(archive_file)
}

/// Write every file in `staging` into a gzip-compressed tar at
/// `output_path`. Entries land at the archive root with their base file
/// name only, so extraction never creates subdirectories.
fn write_tar_gz(staging: &Path, output_path: &Path) -> std::io::Result<()> {
    let tar_gz = File::create(output_path)?;
    let enc = GzEncoder::new(tar_gz, Compression::default());
    let mut tar = Builder::new(enc);

    let mut entries = fs::read_dir(staging)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        tar.append_path_with_name(entry.path(), entry.file_name())?;
    }

    let enc = tar.into_inner()?;
    enc.finish()?;

    Ok(())
}
