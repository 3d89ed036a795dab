//! `shield reflect` - self-reflection log.

use anyhow::Result;
use colored::Colorize;
use shield_core::reflection::MAX_RATING;

use super::AppContext;

pub fn add(ctx: &AppContext, rating: u8, note: Option<String>) -> Result<()> {
    let reflection = ctx.reflections.record(rating, note)?;
    println!(
        "{} {}",
        "Logged".green().bold(),
        stars(reflection.rating)
    );
    Ok(())
}

pub fn list(ctx: &AppContext, days: Option<i64>) -> Result<()> {
    let reflections = match days {
        Some(days) => ctx.reflections.recent(days)?,
        None => ctx.reflections.list()?,
    };

    if reflections.is_empty() {
        println!("No reflections logged yet.");
        return Ok(());
    }

    for reflection in reflections {
        let line = format!(
            "{}  {}",
            reflection.date.format("%Y-%m-%d %H:%M"),
            stars(reflection.rating)
        );
        match reflection.note {
            Some(note) => println!("{line}  {note}"),
            None => println!("{line}"),
        }
    }
    Ok(())
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(usize::from(MAX_RATING) - filled)
    )
}
