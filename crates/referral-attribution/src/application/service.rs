//! Attribution Service
//!
//! Main service implementing AttributionApi: lazy code issuance with
//! bounded collision retry, one-time edge capture with depth capping, and
//! the bounded upward ancestor walk.

use crate::config::AttributionConfig;
use crate::domain::codegen::generate_code;
use crate::domain::entities::{
    Ancestor, CaptureOutcome, EnsureCodeOutcome, ReferralCode, ReferralEdge,
};
use crate::domain::errors::AttributionError;
use crate::ports::inbound::AttributionApi;
use crate::ports::outbound::{CodeStore, EdgeStore};
use async_trait::async_trait;
use chrono::Utc;
use shared_types::{InsertOutcome, UserId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Attribution Service
///
/// Orchestrates the capture pipeline:
/// 1. Resolve code to referrer
/// 2. Reject self-referral
/// 3. Short-circuit if the user already has an edge
/// 4. Compute depth from the referrer's own edge, cap at `max_depth`
/// 5. Conditional-insert; a lost race reads as "already captured"
pub struct AttributionService {
    codes: Arc<dyn CodeStore>,
    edges: Arc<dyn EdgeStore>,
    config: AttributionConfig,
}

impl AttributionService {
    pub fn new(codes: Arc<dyn CodeStore>, edges: Arc<dyn EdgeStore>) -> Self {
        Self::with_config(codes, edges, AttributionConfig::default())
    }

    pub fn with_config(
        codes: Arc<dyn CodeStore>,
        edges: Arc<dyn EdgeStore>,
        config: AttributionConfig,
    ) -> Self {
        Self {
            codes,
            edges,
            config,
        }
    }

    /// Depth of a prospective edge whose referrer is `referrer_user_id`.
    ///
    /// Roots (no inbound edge) sit at depth 0, so their direct referrals
    /// land at depth 1.
    async fn next_depth(&self, referrer_user_id: UserId) -> Result<u8, AttributionError> {
        let referrer_depth = self
            .edges
            .find_edge(referrer_user_id)
            .await?
            .map(|edge| edge.depth)
            .unwrap_or(0);
        Ok(referrer_depth.saturating_add(1))
    }
}

#[async_trait]
impl AttributionApi for AttributionService {
    async fn ensure_referral_code(
        &self,
        user_id: UserId,
    ) -> Result<EnsureCodeOutcome, AttributionError> {
        if let Some(existing) = self.codes.find_by_user(user_id).await? {
            return Ok(EnsureCodeOutcome {
                code: existing,
                created: false,
            });
        }

        for attempt in 1..=self.config.max_code_attempts {
            // ThreadRng is not Send; keep it out of scope across awaits.
            let candidate = {
                let mut rng = rand::thread_rng();
                generate_code(&mut rng, self.config.code_length)
            };
            match self
                .codes
                .insert(ReferralCode::new(user_id, candidate))
                .await?
            {
                InsertOutcome::Created(code) => {
                    info!(user_id = %user_id, attempt, "Referral code issued");
                    return Ok(EnsureCodeOutcome {
                        code,
                        created: true,
                    });
                }
                // Constraint fired on user_id: a concurrent call for the
                // same user won. Their code is the user's code now.
                InsertOutcome::Existing(row) if row.user_id == user_id => {
                    return Ok(EnsureCodeOutcome {
                        code: row,
                        created: false,
                    });
                }
                // Constraint fired on the code string: another user holds
                // this candidate. Draw again.
                InsertOutcome::Existing(_) => {
                    debug!(user_id = %user_id, attempt, "Code candidate collided, retrying");
                }
            }
        }

        warn!(
            user_id = %user_id,
            attempts = self.config.max_code_attempts,
            "Code generation exhausted"
        );
        Err(AttributionError::CodeGenerationExhausted {
            attempts: self.config.max_code_attempts,
        })
    }

    async fn capture_referral(
        &self,
        referred_user_id: UserId,
        code: &str,
        max_depth: u8,
    ) -> Result<CaptureOutcome, AttributionError> {
        // 1. Resolve the code. Unknown codes are input errors, not no-ops.
        let referrer = self
            .codes
            .find_by_code(code)
            .await?
            .ok_or_else(|| AttributionError::CodeNotFound(code.to_string()))?;

        // 2. A user cannot refer themselves.
        if referrer.user_id == referred_user_id {
            debug!(user_id = %referred_user_id, "Self-referral rejected");
            return Ok(CaptureOutcome::SelfReferral);
        }

        // 3. At most one edge per user, ever.
        if self.edges.find_edge(referred_user_id).await?.is_some() {
            debug!(user_id = %referred_user_id, "Referral already captured");
            return Ok(CaptureOutcome::AlreadyCaptured);
        }

        // 4. Depth cap bounds the forest height and reward liability.
        let depth = self.next_depth(referrer.user_id).await?;
        if depth > max_depth {
            info!(
                referred = %referred_user_id,
                referrer = %referrer.user_id,
                depth,
                max_depth,
                "Referral rejected at depth limit"
            );
            return Ok(CaptureOutcome::DepthLimited);
        }

        // 5. Conditional insert. Losing the race to a concurrent capture is
        //    indistinguishable from step 3.
        let edge = ReferralEdge::new(referred_user_id, referrer.user_id, depth, Utc::now());
        match self.edges.insert_edge(edge).await? {
            InsertOutcome::Created(edge) => {
                info!(
                    referred = %referred_user_id,
                    referrer = %referrer.user_id,
                    depth,
                    "Referral captured"
                );
                Ok(CaptureOutcome::Captured(edge))
            }
            InsertOutcome::Existing(_) => Ok(CaptureOutcome::AlreadyCaptured),
        }
    }

    async fn referral_ancestors(
        &self,
        user_id: UserId,
        max_depth: u8,
    ) -> Result<Vec<Ancestor>, AttributionError> {
        let mut ancestors = Vec::new();
        let mut current = user_id;

        // Bounded linear walk over the flat edge table. Cycles cannot exist
        // by construction, but the level cap still acts as a circuit
        // breaker against malformed data.
        for level in 1..=max_depth {
            let edge = match self.edges.find_edge(current).await? {
                Some(edge) => edge,
                None => break, // reached a root
            };
            ancestors.push(Ancestor {
                user_id: edge.referrer_user_id,
                level,
            });
            current = edge.referrer_user_id;
        }

        Ok(ancestors)
    }
}
