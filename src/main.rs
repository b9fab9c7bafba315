use anyhow::Result;
use clap::Parser;
use std::path::Path;

use autover::config;
use autover::domain::{Classifier, Resolver};
use autover::git::{GitHistory, History};
use autover::publisher::Publisher;
use autover::store::VersionStore;
use autover::ui;

#[derive(clap::Parser)]
#[command(
    name = "autover",
    about = "Compute the next semantic version from conventional commits and apply it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Commit and tag locally without pushing")]
    no_push: bool,

    #[arg(
        long,
        value_name = "SUBJECT",
        help = "Classify a single commit subject and exit"
    )]
    classify: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("autover {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Standalone classifier entry point for per-subject diagnostics
    if let Some(subject) = args.classify.as_deref() {
        println!("{}", Classifier::new().classify(subject));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Open the repository for history lookups
    let history = match GitHistory::open(".") {
        Ok(history) => history,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Find the boundary tag and the commits since it
    let latest_tag = match history.latest_tag() {
        Ok(tag) => tag,
        Err(e) => {
            ui::display_error(&format!("Failed to find latest tag: {}", e));
            std::process::exit(1);
        }
    };

    match latest_tag.as_deref() {
        Some(tag) => ui::display_status(&format!("Latest tag: {}", tag)),
        None => ui::display_status("No tag found; analyzing the most recent commit only"),
    }

    let commits = match history.subjects_since(latest_tag.as_deref()) {
        Ok(commits) => commits,
        Err(e) => {
            ui::display_error(&format!("Failed to collect commits: {}", e));
            std::process::exit(1);
        }
    };

    if commits.is_empty() {
        ui::display_warning(&format!(
            "No new commits since tag '{}'",
            latest_tag.as_deref().unwrap_or("unknown")
        ));
    }

    let subjects: Vec<String> = commits.iter().map(|c| c.subject.clone()).collect();

    // Read the declared version
    let store = VersionStore::new(&config.version_file, &config.version_key);
    let current = match store.read() {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!(
                "Failed to read version from {}: {}",
                config.version_file, e
            ));
            std::process::exit(1);
        }
    };

    // Resolve the next version
    let resolution = Resolver::new().resolve(&current, &subjects);
    ui::display_resolution_steps(&resolution.steps);

    if !resolution.semantic {
        ui::display_warning(&format!(
            "Current version '{}' is not semantic (major.minor.patch); leaving it unchanged",
            current
        ));
        return Ok(());
    }

    if !resolution.changed {
        ui::display_status(&format!("No qualifying commits; version stays at {}", current));
        return Ok(());
    }

    ui::display_proposed_version(&current, &resolution.version);

    let tag = config.tag_for(&resolution.version);

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!(
            "  Step 1: would update {} to {}",
            config.version_file, resolution.version
        ));
        ui::display_success(&format!("  Step 2: would commit and tag {}", tag));
        if !args.no_push {
            ui::display_success(&format!(
                "  Step 3: would push {} to {}",
                tag, config.remote
            ));
        }
        return Ok(());
    }

    if !args.force
        && !ui::confirm_action(&format!(
            "Apply version {} and create tag {}?",
            resolution.version, tag
        ))?
    {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    // Persist the new version
    if let Err(e) = store.write(&current, &resolution.version) {
        ui::display_error(&format!("Failed to update {}: {}", config.version_file, e));
        std::process::exit(1);
    }
    ui::display_success(&format!(
        "Updated {} to {}",
        config.version_file, resolution.version
    ));

    // Commit, tag, push
    let publisher = match Publisher::open(".") {
        Ok(publisher) => publisher,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let message = config.commit_message_for(&resolution.version);
    if let Err(e) = publisher.commit_release(Path::new(&config.version_file), &message) {
        ui::display_error(&format!("Failed to commit release: {}", e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Committed: {}", message));

    if let Err(e) = publisher.create_tag(&tag) {
        ui::display_error(&format!("Failed to create tag '{}': {}", tag, e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Created tag: {}", tag));

    if args.no_push {
        ui::display_manual_push_instruction(&config.remote, &config.branch, &tag);
        return Ok(());
    }

    ui::display_status(&format!(
        "Pushing {} and {} to {}",
        config.branch, tag, config.remote
    ));
    if let Err(e) = publisher.push(&config.remote, &config.branch, &tag) {
        ui::display_error(&format!("Failed to push '{}': {}", tag, e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Pushed {} to {}", tag, config.remote));

    Ok(())
}
