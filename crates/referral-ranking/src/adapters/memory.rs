//! In-memory agent directory.

use crate::domain::entities::AgentProfile;
use crate::ports::outbound::AgentDirectory;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{StoreError, UserId};
use std::collections::HashMap;

/// In-memory `AgentDirectory` for tests and single-process wiring.
#[derive(Default)]
pub struct InMemoryAgentDirectory {
    profiles: RwLock<HashMap<UserId, AgentProfile>>,
}

impl InMemoryAgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, profile: AgentProfile) {
        self.profiles.write().insert(profile.user_id, profile);
    }

    pub fn set_opted_out(&self, user_id: UserId, opted_out: bool) {
        if let Some(profile) = self.profiles.write().get_mut(&user_id) {
            profile.opted_out = opted_out;
        }
    }
}

#[async_trait]
impl AgentDirectory for InMemoryAgentDirectory {
    async fn profiles(&self) -> Result<Vec<AgentProfile>, StoreError> {
        Ok(self.profiles.read().values().cloned().collect())
    }
}
