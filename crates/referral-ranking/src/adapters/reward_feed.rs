//! Active-referral counts read straight off the reward store.

use crate::ports::outbound::ActiveReferralSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use referral_rewards::RewardStore;
use shared_types::{StoreError, UserId};
use std::collections::HashMap;
use std::sync::Arc;

/// Bridges `ActiveReferralSource` onto the rewards crate's store port.
pub struct RewardStoreReferralSource {
    store: Arc<dyn RewardStore>,
}

impl RewardStoreReferralSource {
    pub fn new(store: Arc<dyn RewardStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActiveReferralSource for RewardStoreReferralSource {
    async fn active_counts(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<HashMap<UserId, u64>, StoreError> {
        self.store.active_referral_counts(since).await
    }
}
