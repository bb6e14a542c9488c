use tracing::{info, warn};

use crate::database::{Activities, ActivityStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl From<StoreError> for DirectoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ActivityNotFound(_) => Self::NotFound,
            StoreError::AlreadySignedUp { .. } => Self::AlreadySignedUp,
            StoreError::NotRegistered { .. } => Self::NotRegistered,
        }
    }
}

pub fn list_activities(store: &ActivityStore) -> Activities {
    store.list()
}

pub fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    store.add_participant(activity_name, email).map_err(|e| {
        warn!("Signup rejected: {}", e);
        DirectoryError::from(e)
    })?;
    info!(activity = %activity_name, %email, "participant_signed_up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    store.remove_participant(activity_name, email).map_err(|e| {
        warn!("Unregister rejected: {}", e);
        DirectoryError::from(e)
    })?;
    info!(activity = %activity_name, %email, "participant_unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
