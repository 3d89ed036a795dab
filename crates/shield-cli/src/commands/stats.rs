//! `shield stats` - lifetime stats and monthly timeline.

use anyhow::Result;
use colored::Colorize;

use super::AppContext;

const TIMELINE_WIDTH: usize = 20;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let stats = ctx.stats.user_stats().await?;
    let timeline = ctx.stats.session_timeline().await?;

    println!("{}", "Lifetime stats".bold());
    println!("  Sessions:       {}", stats.total_sessions);
    println!("  Prompts:        {}", stats.total_prompts);
    println!("  Longest streak: {} days", stats.longest_streak);
    println!("  Average rating: {:.1}", stats.average_rating);

    let months = timeline.timeline();
    if months.is_empty() {
        println!();
        println!("No sessions recorded yet.");
        return Ok(());
    }

    let max = months.iter().map(|m| m.count).max().unwrap_or(1).max(1);

    println!();
    println!("{}", "Sessions per month".bold());
    for month in &months {
        let filled = (month.count * TIMELINE_WIDTH).div_ceil(max);
        println!(
            "  {}  {} {}",
            month.month,
            "▇".repeat(filled).cyan(),
            month.count
        );
    }

    Ok(())
}
