use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::models::Activity;

/// Activity name to activity, in seed order.
pub type Activities = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("activity {0:?} does not exist")]
    ActivityNotFound(String),
    #[error("{email} is already in {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not in {activity}")]
    NotRegistered { activity: String, email: String },
}

/// In-memory activity roster. Clones share the same underlying map, so the
/// store can be handed to axum as router state.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<Activities>>,
}

impl ActivityStore {
    pub fn new(activities: Activities) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn list(&self) -> Activities {
        self.inner.read().clone()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write();
        let activity = guard
            .get_mut(name)
            .ok_or_else(|| StoreError::ActivityNotFound(name.to_string()))?;
        if activity.has_participant(email) {
            return Err(StoreError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write();
        let activity = guard
            .get_mut(name)
            .ok_or_else(|| StoreError::ActivityNotFound(name.to_string()))?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(StoreError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        };
        // Vec::remove keeps the remaining signups in order.
        activity.participants.remove(pos);
        Ok(())
    }
}
