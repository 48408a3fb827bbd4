//! Tier classification.

use referral_rewards::TierThreshold;

/// The highest tier whose minimum is at or below `active_referral_count`.
///
/// Thresholds come from a validated `PolicySnapshot`, sorted ascending with
/// the lowest minimum at 0, so this returns `None` only on an empty slice.
pub fn resolve_tier(
    active_referral_count: u64,
    thresholds: &[TierThreshold],
) -> Option<&TierThreshold> {
    thresholds
        .iter()
        .rev()
        .find(|tier| u64::from(tier.min_active_referrals) <= active_referral_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Vec<TierThreshold> {
        vec![
            TierThreshold {
                name: "bronze".into(),
                min_active_referrals: 0,
            },
            TierThreshold {
                name: "silver".into(),
                min_active_referrals: 5,
            },
            TierThreshold {
                name: "gold".into(),
                min_active_referrals: 15,
            },
        ]
    }

    #[test]
    fn test_tier_boundaries() {
        let tiers = thresholds();
        assert_eq!(resolve_tier(0, &tiers).unwrap().name, "bronze");
        assert_eq!(resolve_tier(4, &tiers).unwrap().name, "bronze");
        assert_eq!(resolve_tier(5, &tiers).unwrap().name, "silver");
        assert_eq!(resolve_tier(7, &tiers).unwrap().name, "silver");
        assert_eq!(resolve_tier(15, &tiers).unwrap().name, "gold");
        assert_eq!(resolve_tier(1_000, &tiers).unwrap().name, "gold");
    }

    #[test]
    fn test_empty_thresholds() {
        assert!(resolve_tier(3, &[]).is_none());
    }
}
