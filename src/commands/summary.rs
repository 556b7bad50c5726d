use colored::Colorize;
use depstrap::installer::{RunState, RunSummary, StepOutcome};

pub fn print_summary(summary: &RunSummary) {
    if summary.steps.is_empty() {
        return;
    }

    println!();
    println!("Summary ({}):", summary.platform);
    for step in &summary.steps {
        match &step.outcome {
            StepOutcome::Succeeded => {
                println!("  {} {}", "✓".green(), step.kind);
            }
            StepOutcome::Failed { diagnostic } => {
                println!("  {} {}: {}", "✗".red(), step.kind, diagnostic.dimmed());
            }
        }
    }

    match summary.state {
        RunState::Done if summary.is_success() => println!("{}", "All steps succeeded".green()),
        RunState::Done => println!(
            "{}",
            format!("{} step(s) failed", summary.failures().count()).yellow()
        ),
        RunState::Aborted => println!("{}", "Aborted: pip is not available".red()),
        RunState::Unsupported => {}
    }
}
