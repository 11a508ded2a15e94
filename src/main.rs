mod archive;
mod args;
mod config;
mod context;
mod error;
mod output;
mod release;
mod result;

use archive::ReleaseFiles;
use args::Args;
use context::Context;
use release::ReleaseName;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        git_ref,
        target,
        project_name,
        output_dir,
        verbose,
    } = Args::parse();

    // Create context
    let base_dir = std::env::current_dir()?;
    let ctx = Context::new(base_dir, output_dir, verbose);

    // Use cliclack for nice UI
    cliclack::intro("pack-dist")?;

    let project = config::resolve_project_name(&ctx, project_name)?;
    let name = ReleaseName::new(&project, &git_ref, &target)?;

    if verbose {
        println!("Packaging {} for {}", project, target);
    }

    // Stage the release files and compress them
    let files = ReleaseFiles::for_project(&ctx, &project);

    let spinner = cliclack::spinner();
    spinner.start(format!("Creating archive for {}...", name));

    let archive_file = match archive::build_release_archive(&ctx, &name, &files) {
        Ok(f) => {
            spinner.stop(format!("Created {}", f));
            f
        }
        Err(e) => {
            spinner.error("Failed to create archive");
            return Err(e);
        }
    };

    // Report the artifact name to the orchestrator
    output::emit("name", &archive_file);

    cliclack::outro("Release archive ready")?;
    Ok(())
}
