//! `shield challenge` - 30-day challenge progress.

use anyhow::Result;
use colored::Colorize;
use shield_core::challenge::{ChallengeProgress, TOTAL_DAYS};

use super::AppContext;

const BAR_WIDTH: usize = 30;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let progress = ctx.challenge.progress().await?;
    render(&progress);
    Ok(())
}

pub async fn complete(ctx: &AppContext, day: u8) -> Result<()> {
    let already = ctx.challenge.is_day_completed(day).await.unwrap_or(false);
    let progress = ctx.challenge.complete_day(day).await?;

    if already {
        println!("Day {day} was already complete.");
    } else {
        println!("{}", format!("Day {day} complete!").green().bold());
    }
    render(&progress);
    Ok(())
}

fn render(progress: &ChallengeProgress) {
    let completed = progress.completed_count();
    let filled = completed * BAR_WIDTH / usize::from(TOTAL_DAYS);
    let bar = format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    );

    println!("30-Day Challenge");
    println!("{bar} {}%", progress.percent());
    println!("{completed}/{TOTAL_DAYS} days complete");

    if progress.is_finished() {
        println!("{}", "Challenge finished - incredible work!".yellow().bold());
    } else if completed > 0 {
        let days: Vec<String> = progress.completed_days().map(|d| d.to_string()).collect();
        println!("Completed days: {}", days.join(", "));
    }
}
