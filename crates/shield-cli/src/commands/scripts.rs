//! `shield scripts` - local practice script library.

use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

use super::AppContext;

pub fn list(ctx: &AppContext) -> Result<()> {
    let scripts = ctx.scripts.list()?;
    if scripts.is_empty() {
        println!("No scripts stored.");
        return Ok(());
    }

    for script in scripts {
        println!(
            "{}  {}  {}",
            script.id.to_string().dimmed(),
            script.created_at.format("%Y-%m-%d"),
            script.title.bold()
        );
    }
    Ok(())
}

pub fn show(ctx: &AppContext, id: Uuid) -> Result<()> {
    match ctx.scripts.get(id)? {
        Some(script) => {
            println!("{}", script.title.bold());
            println!();
            println!("{}", script.text);
        }
        None => println!("No script with id {id}."),
    }
    Ok(())
}

pub fn add(ctx: &AppContext, title: &str, text: &str) -> Result<()> {
    let script = ctx.scripts.add(title, text)?;
    println!(
        "{} {} ({})",
        "Added".green().bold(),
        script.title,
        script.id
    );
    Ok(())
}

pub fn remove(ctx: &AppContext, id: Uuid) -> Result<()> {
    ctx.scripts.delete(id)?;
    println!("Removed {id}.");
    Ok(())
}
