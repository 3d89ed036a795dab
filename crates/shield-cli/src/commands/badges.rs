//! `shield badges` - badges earned by the most recent session.

use anyhow::Result;
use colored::Colorize;

use super::AppContext;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let timeline = ctx.stats.session_timeline().await?;

    let Some(latest) = timeline.latest() else {
        println!("No sessions recorded yet - badges unlock after your first practice.");
        return Ok(());
    };

    let earned = ctx.badges.badges_for(latest).await?;

    println!(
        "Latest session: {} ({})",
        latest.date.format("%Y-%m-%d"),
        match latest.mode {
            shield_core::session::SessionMode::Script => "script",
            shield_core::session::SessionMode::Free => "free",
        }
    );

    if earned.is_empty() {
        println!("No badges this time - keep practicing!");
        return Ok(());
    }

    println!();
    for badge in earned {
        println!("  {} {}", badge.icon, badge.name.bold());
    }
    Ok(())
}
