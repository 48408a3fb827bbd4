//! TTL cache over a `PolicyProvider`.
//!
//! Issuance runs on every verified payment, so the admin policy is read
//! constantly but changes rarely. The cache keeps one snapshot fresh for a
//! short TTL and, when configured, serves the previous snapshot if a
//! refresh fails. The snapshot handed out is an immutable value; a call in
//! flight never observes a policy change midway.

use crate::config::PolicyCacheConfig;
use crate::domain::policy::PolicySnapshot;
use crate::ports::outbound::PolicyProvider;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::StoreError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

struct CacheSlot {
    snapshot: PolicySnapshot,
    fetched_at: Instant,
}

/// Caching decorator for any `PolicyProvider`.
pub struct CachedPolicyProvider {
    inner: Arc<dyn PolicyProvider>,
    ttl: Duration,
    serve_stale_on_error: bool,
    slot: Mutex<Option<CacheSlot>>,
}

impl CachedPolicyProvider {
    pub fn new(inner: Arc<dyn PolicyProvider>) -> Self {
        Self::with_config(inner, PolicyCacheConfig::default())
    }

    pub fn with_config(inner: Arc<dyn PolicyProvider>, config: PolicyCacheConfig) -> Self {
        Self {
            inner,
            ttl: Duration::from_secs(config.ttl_secs),
            serve_stale_on_error: config.serve_stale_on_error,
            slot: Mutex::new(None),
        }
    }

    fn cached_fresh(&self) -> Option<PolicySnapshot> {
        let slot = self.slot.lock();
        slot.as_ref()
            .filter(|s| s.fetched_at.elapsed() < self.ttl)
            .map(|s| s.snapshot.clone())
    }

    fn cached_any(&self) -> Option<PolicySnapshot> {
        self.slot.lock().as_ref().map(|s| s.snapshot.clone())
    }

    fn store(&self, snapshot: &PolicySnapshot) {
        *self.slot.lock() = Some(CacheSlot {
            snapshot: snapshot.clone(),
            fetched_at: Instant::now(),
        });
    }
}

#[async_trait]
impl PolicyProvider for CachedPolicyProvider {
    async fn current(&self) -> Result<PolicySnapshot, StoreError> {
        if let Some(snapshot) = self.cached_fresh() {
            return Ok(snapshot);
        }

        match self.inner.current().await {
            Ok(snapshot) => {
                self.store(&snapshot);
                Ok(snapshot)
            }
            Err(err) if self.serve_stale_on_error => match self.cached_any() {
                Some(stale) => {
                    warn!(error = %err, "Policy refresh failed, serving stale snapshot");
                    Ok(stale)
                }
                None => Err(err),
            },
            Err(err) => Err(err),
        }
    }
}
