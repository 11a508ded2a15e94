use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("project name not configured (pass --project-name or set PROJECT_NAME)")]
    ConfigMissing,

    #[error("failed to parse {0}")]
    InvalidManifest(String, #[source] toml::de::Error),

    #[error("invalid release name: {0}")]
    InvalidReleaseName(String),

    #[error("required input file not found: {0}")]
    MissingInput(String),

    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write archive {path}: {source}")]
    ArchiveWrite {
        path: String,
        source: std::io::Error,
    },
}
