//! In-memory store adapters.
//!
//! Unit-test and single-process backing for the attribution ports. Each
//! adapter holds its tables under one `RwLock` so a conditional insert
//! checks its unique constraints and writes in one critical section, the
//! same atomicity a relational store gives per statement.

use crate::domain::entities::{ReferralCode, ReferralEdge};
use crate::ports::outbound::{CodeStore, EdgeStore};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{InsertOutcome, StoreError, UserId};
use std::collections::HashMap;

#[derive(Default)]
struct CodeTable {
    by_user: HashMap<UserId, ReferralCode>,
    by_code: HashMap<String, UserId>,
}

/// In-memory `CodeStore` with unique constraints on user and code.
#[derive(Default)]
pub struct InMemoryCodeStore {
    table: RwLock<CodeTable>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<ReferralCode>, StoreError> {
        Ok(self.table.read().by_user.get(&user_id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ReferralCode>, StoreError> {
        let table = self.table.read();
        let owner = match table.by_code.get(code) {
            Some(owner) => owner,
            None => return Ok(None),
        };
        match table.by_user.get(owner) {
            Some(row) => Ok(Some(row.clone())),
            None => Err(StoreError::Corrupted(format!(
                "code index points at user {owner} with no code row"
            ))),
        }
    }

    async fn insert(&self, code: ReferralCode) -> Result<InsertOutcome<ReferralCode>, StoreError> {
        let mut table = self.table.write();
        if let Some(existing) = table.by_user.get(&code.user_id) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }
        if let Some(owner) = table.by_code.get(&code.code) {
            let owner = *owner;
            let existing = table.by_user.get(&owner).cloned().ok_or_else(|| {
                StoreError::Corrupted(format!("code index points at user {owner} with no code row"))
            })?;
            return Ok(InsertOutcome::Existing(existing));
        }
        table.by_code.insert(code.code.clone(), code.user_id);
        table.by_user.insert(code.user_id, code.clone());
        Ok(InsertOutcome::Created(code))
    }
}

/// In-memory `EdgeStore`; one immutable row per referred user.
#[derive(Default)]
pub struct InMemoryEdgeStore {
    edges: RwLock<HashMap<UserId, ReferralEdge>>,
}

impl InMemoryEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EdgeStore for InMemoryEdgeStore {
    async fn find_edge(
        &self,
        referred_user_id: UserId,
    ) -> Result<Option<ReferralEdge>, StoreError> {
        Ok(self.edges.read().get(&referred_user_id).cloned())
    }

    async fn insert_edge(
        &self,
        edge: ReferralEdge,
    ) -> Result<InsertOutcome<ReferralEdge>, StoreError> {
        let mut edges = self.edges.write();
        if let Some(existing) = edges.get(&edge.referred_user_id) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }
        edges.insert(edge.referred_user_id, edge.clone());
        Ok(InsertOutcome::Created(edge))
    }
}
