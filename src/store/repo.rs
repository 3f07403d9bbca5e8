use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::store::models::User;

/// How the store hands out user ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum IdStrategy {
    /// `len + 1` on create. After a delete the remaining users are
    /// renumbered `1..N` by position, so previously issued ids can move.
    #[default]
    Sequential,
    /// Random UUID v4 on create. Ids never change.
    Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(User),
    /// No user had the id; carries the untouched collection.
    NotFound(Vec<User>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    /// No user had the id; carries the untouched collection.
    NotFound(Vec<User>),
}

/// Ordered in-memory collection of users.
///
/// Cloning is cheap and every clone shares the same collection. Each
/// operation holds the lock for its whole read-modify-write, so concurrent
/// requests never observe a half-applied mutation.
#[derive(Clone)]
pub struct UserStore {
    users: Arc<Mutex<Vec<User>>>,
    id_strategy: IdStrategy,
}

impl UserStore {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            id_strategy,
        }
    }

    // ─── Reads ────────────────────────────────────────────────────────────────

    pub async fn list(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    /// Returns the first user whose id matches.
    pub async fn get(&self, id: &str) -> Option<User> {
        let users = self.users.lock().await;
        let found = users.iter().find(|u| u.id == id).cloned();
        if found.is_none() {
            debug!(id, "user not found");
        }
        found
    }

    // ─── Writes ───────────────────────────────────────────────────────────────

    /// Assigns a fresh id (ignoring whatever the caller put there) and appends.
    pub async fn create(&self, mut user: User) -> User {
        let mut users = self.users.lock().await;
        user.id = match self.id_strategy {
            IdStrategy::Sequential => (users.len() + 1).to_string(),
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
        };
        users.push(user.clone());

        info!(id = %user.id, total = users.len(), "user created");
        user
    }

    /// Replaces the user with `id` by `user`, keeping the id.
    ///
    /// The replacement goes to the end of the collection, not back into the
    /// old slot.
    pub async fn update(&self, id: &str, mut user: User) -> UpdateOutcome {
        let mut users = self.users.lock().await;
        let Some(index) = users.iter().position(|u| u.id == id) else {
            debug!(id, "update target not found");
            return UpdateOutcome::NotFound(users.clone());
        };

        users.remove(index);
        user.id = id.to_string();
        users.push(user.clone());

        info!(id, "user updated");
        UpdateOutcome::Updated(user)
    }

    pub async fn delete(&self, id: &str) -> DeleteOutcome {
        let mut users = self.users.lock().await;
        let Some(index) = users.iter().position(|u| u.id == id) else {
            debug!(id, "delete target not found");
            return DeleteOutcome::NotFound(users.clone());
        };

        users.remove(index);
        if self.id_strategy == IdStrategy::Sequential {
            for (position, user) in users.iter_mut().enumerate() {
                user.id = (position + 1).to_string();
            }
        }

        info!(id, remaining = users.len(), "user deleted");
        DeleteOutcome::Deleted
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
