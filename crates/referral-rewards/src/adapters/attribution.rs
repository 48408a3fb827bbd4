//! Ancestor resolution backed by the attribution subsystem.

use crate::ports::outbound::AncestorResolver;
use async_trait::async_trait;
use referral_attribution::{Ancestor, AttributionApi, AttributionError};
use shared_types::{StoreError, UserId};
use std::sync::Arc;

/// Bridges `AncestorResolver` onto the attribution crate's API.
pub struct AttributionAncestorResolver {
    api: Arc<dyn AttributionApi>,
}

impl AttributionAncestorResolver {
    pub fn new(api: Arc<dyn AttributionApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AncestorResolver for AttributionAncestorResolver {
    async fn ancestors(
        &self,
        user_id: UserId,
        max_depth: u8,
    ) -> Result<Vec<Ancestor>, StoreError> {
        self.api
            .referral_ancestors(user_id, max_depth)
            .await
            .map_err(|err| match err {
                AttributionError::Store(store) => store,
                // The walk takes no code input, so anything else is an
                // infrastructure-shaped surprise.
                other => StoreError::Unavailable(other.to_string()),
            })
    }
}
