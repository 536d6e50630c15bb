//! Single-slot session state for the active repository.
//!
//! One process holds at most one loaded repository; loading another replaces
//! it wholesale. There is deliberately no per-user or per-client isolation —
//! concurrent users loading different repositories overwrite each other.
//! What the store does guarantee is that replacement is a single swap of an
//! immutable snapshot: a reader sees either the old session or the new one,
//! never a mixture of the two.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::RepoMetadata;
use crate::persona::Persona;

/// The active unit of loaded-repository state.
#[derive(Debug, Clone)]
pub struct RepoSession {
    /// URL the repository was loaded from.
    pub repo_url: String,
    /// Metadata fetched once at load time.
    pub metadata: RepoMetadata,
    /// Digest, already truncated to the context budget.
    pub digest: String,
    /// Relative paths of the collected files, in traversal order.
    pub files: Vec<String>,
    /// Persona used by the most recent question.
    pub last_persona: Persona,
}

/// Process-wide store holding at most one [`RepoSession`].
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<Arc<RepoSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active session wholesale.
    pub async fn load(&self, session: RepoSession) {
        let mut slot = self.inner.write().await;
        *slot = Some(Arc::new(session));
    }

    /// Snapshot of the active session, if any.
    pub async fn current(&self) -> Option<Arc<RepoSession>> {
        self.inner.read().await.clone()
    }

    /// Record the persona used by the latest question.
    ///
    /// Touches only the persona field. A no-op when nothing is loaded.
    pub async fn mark_persona(&self, persona: Persona) {
        let mut slot = self.inner.write().await;
        if let Some(current) = slot.as_ref() {
            let mut updated = (**current).clone();
            updated.last_persona = persona;
            *slot = Some(Arc::new(updated));
        }
    }
}

/// Shared handle passed explicitly into the request surface.
pub type SharedSessionStore = Arc<SessionStore>;

/// Create a shared session store.
pub fn create_shared_session_store() -> SharedSessionStore {
    Arc::new(SessionStore::new())
}
