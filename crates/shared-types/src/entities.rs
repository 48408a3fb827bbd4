//! Identifiers and value objects shared across referral subsystems.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Marketplace account identifier.
///
/// `Ord` so leaderboard tie-breaks have a deterministic total order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of an issued referral reward row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardId(pub Uuid);

impl RewardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RewardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RewardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Spendable credit kinds tracked by the ledger.
///
/// Reward rules reference these by name; unknown names are rejected at
/// policy-validation time via `FromStr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditType {
    /// Credits spendable on publishing a listing.
    ListingCredit,
    /// Credits spendable on featured placement.
    FeaturedCredit,
}

impl CreditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListingCredit => "listing_credit",
            Self::FeaturedCredit => "featured_credit",
        }
    }
}

impl fmt::Display for CreditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditType {
    type Err = UnknownCreditType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listing_credit" => Ok(Self::ListingCredit),
            "featured_credit" => Ok(Self::FeaturedCredit),
            other => Err(UnknownCreditType(other.to_string())),
        }
    }
}

/// Rejection for credit-type names no ledger knows about.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown credit type: {0}")]
pub struct UnknownCreditType(pub String);

/// Monetizable event categories that can trigger reward issuance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A verified paid subscription.
    SubscriptionPayment,
    /// A verified purchase of listing/featured credits.
    CreditPurchase,
    /// A verified consumption of previously purchased credits.
    CreditSpend,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubscriptionPayment => "subscription_payment",
            Self::CreditPurchase => "credit_purchase",
            Self::CreditSpend => "credit_spend",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable external identifier for a monetizable event.
///
/// Typically a payment-gateway transaction reference. Redelivered webhooks
/// carry the same reference, which is what makes the reward idempotency key
/// stable across retries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventReference(String);

impl EventReference {
    /// Wrap a gateway reference. Empty or whitespace-only references are
    /// rejected: they would collapse distinct events into one idempotency key.
    pub fn new(reference: impl Into<String>) -> Result<Self, InvalidEventReference> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(InvalidEventReference);
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejection for empty event references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Event reference must be non-empty")]
pub struct InvalidEventReference;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_type_round_trip() {
        for credit in [CreditType::ListingCredit, CreditType::FeaturedCredit] {
            assert_eq!(credit.as_str().parse::<CreditType>().unwrap(), credit);
        }
    }

    #[test]
    fn test_unknown_credit_type_rejected() {
        let err = "magic_beans".parse::<CreditType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown credit type: magic_beans");
    }

    #[test]
    fn test_event_reference_rejects_empty() {
        assert!(EventReference::new("").is_err());
        assert!(EventReference::new("   ").is_err());
        assert!(EventReference::new("psk_tx_12345").is_ok());
    }

    #[test]
    fn test_user_id_serde_transparent() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as a bare UUID string, not a wrapper object
        assert!(json.starts_with('"'));
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
