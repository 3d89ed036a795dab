pub mod badge_service;
pub mod challenge_service;
pub mod reflection_service;
pub mod script_service;
pub mod stats_service;
pub mod tutorial_service;

pub use badge_service::BadgeService;
pub use challenge_service::ChallengeService;
pub use reflection_service::ReflectionService;
pub use script_service::ScriptService;
pub use stats_service::StatsService;
pub use tutorial_service::TutorialService;
