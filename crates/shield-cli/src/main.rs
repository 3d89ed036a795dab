use anyhow::Result;
use clap::{Parser, Subcommand};
use uuid::Uuid;

mod commands;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "shield")]
#[command(about = "CringeShield - speaking practice companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track the 30-day challenge
    Challenge {
        #[command(subcommand)]
        action: ChallengeAction,
    },
    /// Show lifetime stats and the monthly timeline
    Stats,
    /// Show badges earned by the most recent session
    Badges,
    /// Manage the local practice script library
    Scripts {
        #[command(subcommand)]
        action: ScriptAction,
    },
    /// Log and review self-reflections
    Reflect {
        #[command(subcommand)]
        action: ReflectAction,
    },
}

#[derive(Subcommand)]
enum ChallengeAction {
    /// Show current progress
    Show,
    /// Mark a challenge day as complete
    Complete {
        /// Day number in 1..=30
        day: u8,
    },
}

#[derive(Subcommand)]
enum ScriptAction {
    /// List stored scripts
    List,
    /// Print one script in full
    Show {
        /// Script id
        id: Uuid,
    },
    /// Add a new script
    Add {
        /// Script title
        title: String,
        /// Script text
        text: String,
    },
    /// Remove a script
    Rm {
        /// Script id
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum ReflectAction {
    /// Log a reflection
    Add {
        /// Rating on the 1..=5 scale
        rating: u8,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },
    /// List logged reflections
    List {
        /// Only show the last N days
        #[arg(long)]
        days: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::init()?;
    ctx.show_tutorial_hint_once();

    match cli.command {
        Commands::Challenge { action } => match action {
            ChallengeAction::Show => commands::challenge::show(&ctx).await?,
            ChallengeAction::Complete { day } => commands::challenge::complete(&ctx, day).await?,
        },
        Commands::Stats => commands::stats::show(&ctx).await?,
        Commands::Badges => commands::badges::show(&ctx).await?,
        Commands::Scripts { action } => match action {
            ScriptAction::List => commands::scripts::list(&ctx)?,
            ScriptAction::Show { id } => commands::scripts::show(&ctx, id)?,
            ScriptAction::Add { title, text } => commands::scripts::add(&ctx, &title, &text)?,
            ScriptAction::Rm { id } => commands::scripts::remove(&ctx, id)?,
        },
        Commands::Reflect { action } => match action {
            ReflectAction::Add { rating, note } => commands::reflect::add(&ctx, rating, note)?,
            ReflectAction::List { days } => commands::reflect::list(&ctx, days)?,
        },
    }

    Ok(())
}
