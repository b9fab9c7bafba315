//! Terminal output and confirmation prompts

use std::io::{self, Write};

use anyhow::Result;
use console::{style, truncate_str};

use crate::domain::{BumpCategory, Step};

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Print one line per commit naming the increment it was classified as.
pub fn display_resolution_steps(steps: &[Step]) {
    if steps.is_empty() {
        return;
    }

    println!(
        "\n{}",
        style(format!("Analyzing {} commit(s)", steps.len())).bold()
    );

    for step in steps {
        let increment = match step.category {
            BumpCategory::None => "Detected no version increment".to_string(),
            other => format!("Detected {} version increment", other),
        };

        let short_subject = truncate_str(&step.subject, 60, "");
        println!("  {} - {}", increment, style(short_subject).dim());
    }
}

/// Show the version change about to be applied
pub fn display_proposed_version(current: &str, next: &str) {
    println!("\n{}", style("Proposed version change:").bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(next).green());
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive); anything else, including a bare
/// Enter, counts as no.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Show the command to push manually when pushing was skipped
pub fn display_manual_push_instruction(remote: &str, branch: &str, tag: &str) {
    println!(
        "\n{} To push this release later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {} {}", remote, branch, tag)).cyan()
    );
}
