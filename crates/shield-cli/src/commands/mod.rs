pub mod badges;
pub mod challenge;
pub mod reflect;
pub mod scripts;
pub mod stats;

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use shield_application::{
    BadgeService, ChallengeService, ReflectionService, ScriptService, StatsService,
    TutorialService,
};
use shield_core::store::KeyValueStore;
use shield_infrastructure::{
    ConfigService, JsonFileStore, LocalReflectionRepository, LocalScriptRepository, RestClient,
};

/// Wired-up services shared by every subcommand.
pub struct AppContext {
    pub challenge: ChallengeService,
    pub stats: StatsService,
    pub badges: BadgeService,
    pub scripts: ScriptService,
    pub reflections: ReflectionService,
    pub tutorial: TutorialService,
}

impl AppContext {
    /// Builds the full service graph: config, REST client, local store.
    pub fn init() -> Result<Self> {
        let config = ConfigService::new().get_config();
        let api = Arc::new(RestClient::from_config(&config));

        let store: Arc<dyn KeyValueStore> = Arc::new(
            JsonFileStore::default_location().context("Failed to open the local store")?,
        );

        let scripts = ScriptService::new(Arc::new(LocalScriptRepository::new(store.clone())));
        // Startup seeding; a non-empty library is a no-op
        scripts
            .ensure_seeded()
            .context("Failed to seed the script library")?;

        Ok(Self {
            challenge: ChallengeService::new(api.clone()),
            stats: StatsService::new(api.clone(), api.clone()),
            badges: BadgeService::new(api),
            scripts,
            reflections: ReflectionService::new(Arc::new(LocalReflectionRepository::new(
                store.clone(),
            ))),
            tutorial: TutorialService::new(store),
        })
    }

    /// Prints the first-run hint a single time, then sets the seen flag.
    pub fn show_tutorial_hint_once(&self) {
        if self.tutorial.has_seen_tutorial() {
            return;
        }

        println!(
            "{}",
            "Welcome to CringeShield! Practice out loud, mark challenge days with \
             `shield challenge complete <day>`, and log how it felt with `shield reflect add`."
                .cyan()
        );
        println!();
        self.tutorial.mark_tutorial_seen();
    }
}
