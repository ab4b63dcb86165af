use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use bump_version::cli::{BumpWorkflow, BumpWorkflowArgs};
use bump_version::config;
use bump_version::git::RepositoryLocator;
use bump_version::manifest::FileManifest;
use bump_version::ui::{ConsoleReporter, Reporter};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Update the semantic version in a project manifest",
    after_help = concat!(
        "Examples:\n",
        "  bump-version 1.2.3\n",
        "  bump-version 1.2.3 +c\n",
        "  bump-version 0.9.0 +force"
    )
)]
struct Args {
    #[arg(
        value_name = "TOKENS",
        help = "New version (MAJOR.MINOR.PATCH), optionally followed by +c and/or +force"
    )]
    tokens: Vec<String>,

    #[arg(short, long, help = "Manifest file to update [default: package.json]")]
    manifest: Option<PathBuf>,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Accept a version lower than the current one")]
    force: bool,

    #[arg(short, long, help = "Commit all changes after updating the manifest")]
    commit: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let reporter = ConsoleReporter::new();
    match run(args, &reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, reporter: &dyn Reporter) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let manifest = FileManifest::from_config(&config.manifest, args.manifest.as_deref())?;
    let vcs = RepositoryLocator::new(manifest.directory());

    let workflow_args = BumpWorkflowArgs {
        tokens: args.tokens,
        force: args.force,
        commit: args.commit,
        dry_run: args.dry_run,
    };

    BumpWorkflow::new(&manifest, &vcs, reporter).run(&workflow_args, &config)?;
    Ok(())
}
