pub mod config_service;
pub mod json_file_store;
pub mod memory_store;
pub mod paths;
pub mod reflection_repository;
pub mod rest_client;
pub mod script_repository;

pub use crate::config_service::ConfigService;
pub use crate::json_file_store::JsonFileStore;
pub use crate::memory_store::InMemoryStore;
pub use crate::reflection_repository::LocalReflectionRepository;
pub use crate::rest_client::RestClient;
pub use crate::script_repository::LocalScriptRepository;
