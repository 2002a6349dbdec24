mod error;
mod resume;
mod settings;
mod site;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use error::SyncError;
use resume::ExtractedProfile;
use settings::{Overrides, Settings};

const SUMMARY_PREVIEW_CHARS: usize = 400;

#[derive(Parser)]
#[command(name = "resume_sync", about = "Sync resume.txt into the static site pages")]
struct Cli {
    /// Site root holding resume.txt and the HTML pages
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Resume text file (relative to the site root unless absolute)
    #[arg(long, global = true)]
    resume: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields and rewrite about/skills/contact pages (default)
    Sync {
        /// Print what was found without touching the pages
        #[arg(long)]
        dry_run: bool,
    },
    /// Extract fields only
    Extract {
        /// Print the extracted profile as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(Overrides {
        root: cli.root,
        resume: cli.resume,
    })?;

    let command = cli.command.unwrap_or(Commands::Sync { dry_run: false });
    let resume_path = settings.resume_path();
    let profile = extract_file(&resume_path)?;

    match command {
        Commands::Sync { dry_run } => {
            print_report(&profile);
            if dry_run {
                info!("dry run, pages not touched");
                return Ok(());
            }
            let updated = site::update_site(&settings.page_paths(), &profile)?;
            if updated.is_empty() {
                println!("No pages updated");
                return Ok(());
            }
            let names: Vec<String> = updated
                .iter()
                .map(|p| {
                    p.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| p.display().to_string())
                })
                .collect();
            println!("Updated {}", names.join(", "));
        }
        Commands::Extract { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_report(&profile);
            }
        }
    }

    Ok(())
}

fn extract_file(path: &Path) -> Result<ExtractedProfile, SyncError> {
    let bytes = fs::read(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(resume = %path.display(), bytes = bytes.len(), "read resume");
    let text = resume::text::decode_lossy(&bytes);
    Ok(resume::extract(&text))
}

fn print_report(profile: &ExtractedProfile) {
    eprintln!("Found email: {}", profile.email);
    eprintln!("Found phone: {}", profile.phone);
    eprintln!(
        "Summary preview:\n {}",
        profile.summary_preview(SUMMARY_PREVIEW_CHARS)
    );
    eprintln!("Skills count: {}", profile.skills.len());
}
