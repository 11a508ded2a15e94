use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the pack-dist tool
#[derive(Debug)]
pub struct Args {
    /// Git reference the release was cut from (e.g. refs/tags/v1.2.3)
    pub git_ref: String,

    /// Target triple the binary was built for
    pub target: String,

    /// Project name override (also sourced from PROJECT_NAME)
    pub project_name: Option<String>,

    /// Directory the archive is written to
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("pack-dist")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages a prebuilt release binary into a versioned tar.gz archive")
            .arg(
                Arg::new("ref")
                    .value_name("REF")
                    .required(true)
                    .help("Git reference, e.g. refs/tags/v1.2.3 (the refs/tags/ prefix is stripped)")
            )
            .arg(
                Arg::new("target")
                    .value_name("TARGET")
                    .required(true)
                    .help("Target triple, e.g. x86_64-unknown-linux-gnu")
            )
            .arg(
                Arg::new("project-name")
                    .short('n')
                    .long("project-name")
                    .value_name("NAME")
                    .env("PROJECT_NAME")
                    .help("Project name used in the archive name (falls back to package.name in ./Cargo.toml)")
            )
            .arg(
                Arg::new("output-dir")
                    .short('o')
                    .long("output-dir")
                    .value_name("DIR")
                    .help("Directory to write the archive to [default: dist]")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            git_ref: matches
                .get_one::<String>("ref")
                .cloned()
                .expect("required argument"),
            target: matches
                .get_one::<String>("target")
                .cloned()
                .expect("required argument"),
            project_name: matches.get_one::<String>("project-name").cloned(),
            output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
            verbose: matches.get_flag("verbose"),
        }
    }
}
