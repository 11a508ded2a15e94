use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show per-file staging details)
    pub verbose: bool,

    /// Base directory the input files are resolved against
    pub base_dir: PathBuf,

    /// Directory the finished archive is written to
    pub output_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, output_dir: Option<PathBuf>, verbose: bool) -> Self {
        let output_dir = match output_dir {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => base_dir.join(dir),
            None => base_dir.join("dist"),
        };

        Self {
            verbose,
            base_dir,
            output_dir,
        }
    }
}
