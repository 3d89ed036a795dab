//! Session API trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::model::Session;

/// Remote API for recorded practice sessions.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Fetches every recorded session for the current user.
    async fn list_sessions(&self) -> Result<Vec<Session>>;
}
