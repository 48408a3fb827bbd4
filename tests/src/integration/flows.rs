//! # Integration Test Flows
//!
//! End-to-end choreography across attribution, rewards, and ranking:
//! onboarding issues codes, signups capture edges, verified payments issue
//! rewards up the ancestor chain, and the leaderboard ranks the result.

#[cfg(test)]
mod tests {
    use crate::integration::harness::{default_policy, fixed_now, Engine};
    use referral_attribution::{AttributionApi, CaptureOutcome};
    use referral_ranking::{LeaderboardApi, LeaderboardWindow};
    use referral_rewards::RewardStore;
    use shared_types::{CreditType, UserId};

    /// Build the chain u1→u2→…→u{n} through onboarding calls.
    async fn chain(engine: &Engine, n: usize) -> Vec<UserId> {
        let mut users = Vec::with_capacity(n);
        users.push(engine.agent("Root Referrer").await);
        for i in 1..n {
            let user = engine.agent(&format!("Chain User {i}")).await;
            let outcome = engine.refer(users[i - 1], user).await;
            assert!(outcome.captured(), "link {i} should capture");
            users.push(user);
        }
        users
    }

    #[tokio::test]
    async fn test_chain_depths_and_limit() {
        let engine = Engine::new();
        let users = chain(&engine, 6).await;

        // u7 would land at depth 6 with max_depth 5.
        let u7 = engine.agent("Seventh User").await;
        let outcome = engine.refer(users[5], u7).await;
        assert_eq!(outcome, CaptureOutcome::DepthLimited);
        assert_eq!(outcome.reason(), Some("depth_limit"));

        // No edge was written: u7 has no ancestors.
        let ancestors = engine
            .attribution
            .referral_ancestors(u7, 5)
            .await
            .unwrap();
        assert!(ancestors.is_empty());
    }

    #[tokio::test]
    async fn test_ancestors_of_chain_tail() {
        let engine = Engine::new();
        let users = chain(&engine, 6).await;

        let ancestors = engine
            .attribution
            .referral_ancestors(users[5], 5)
            .await
            .unwrap();

        let got: Vec<(UserId, u8)> = ancestors.iter().map(|a| (a.user_id, a.level)).collect();
        let expected = vec![
            (users[4], 1),
            (users[3], 2),
            (users[2], 3),
            (users[1], 4),
            (users[0], 5),
        ];
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn test_payment_rewards_two_levels_and_credits_ledger() {
        let engine = Engine::new();
        let users = chain(&engine, 3).await;
        let (root, mid, referred) = (users[0], users[1], users[2]);

        let report = engine.pay(referred, "psk_tx_1001", fixed_now()).await.unwrap();

        assert_eq!(report.issued, 2);
        assert_eq!(
            engine
                .rewards
                .balance(mid, CreditType::ListingCredit)
                .await
                .unwrap(),
            5
        );
        assert_eq!(
            engine
                .rewards
                .balance(root, CreditType::FeaturedCredit)
                .await
                .unwrap(),
            2
        );
        // The payer earns nothing from their own payment.
        assert_eq!(
            engine
                .rewards
                .balance(referred, CreditType::ListingCredit)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_webhook_redelivery_is_idempotent_end_to_end() {
        let engine = Engine::new();
        let users = chain(&engine, 3).await;
        let referred = users[2];
        let at = fixed_now();

        let first = engine.pay(referred, "psk_tx_2002", at).await.unwrap();
        assert_eq!(first.issued, 2);

        // Gateway redelivers the same webhook three more times.
        for _ in 0..3 {
            let replay = engine.pay(referred, "psk_tx_2002", at).await.unwrap();
            assert_eq!(replay.issued, 0);
        }

        assert_eq!(engine.rewards.ledger_len(), 2);
        assert_eq!(
            engine
                .rewards
                .balance(users[1], CreditType::ListingCredit)
                .await
                .unwrap(),
            5
        );
    }

    #[tokio::test]
    async fn test_distinct_payments_accumulate() {
        let engine = Engine::new();
        let users = chain(&engine, 2).await;
        let (referrer, referred) = (users[0], users[1]);

        engine.pay(referred, "psk_tx_a", fixed_now()).await.unwrap();
        engine.pay(referred, "psk_tx_b", fixed_now()).await.unwrap();

        assert_eq!(
            engine
                .rewards
                .balance(referrer, CreditType::ListingCredit)
                .await
                .unwrap(),
            10
        );
    }

    #[tokio::test]
    async fn test_leaderboard_reflects_reward_activity() {
        let engine = Engine::new();
        let now = fixed_now();

        // alice refers three paying users, bob refers one, carol none.
        let alice = engine.agent("Alice Avery").await;
        let bob = engine.agent("Bob Breck").await;
        let carol = engine.agent("Carol Crane").await;

        for i in 0..3 {
            let referred = engine.agent(&format!("Alice Signup {i}")).await;
            assert!(engine.refer(alice, referred).await.captured());
            engine
                .pay(referred, &format!("tx_alice_{i}"), now)
                .await
                .unwrap();
        }
        let referred = engine.agent("Bob Signup").await;
        assert!(engine.refer(bob, referred).await.captured());
        engine.pay(referred, "tx_bob_0", now).await.unwrap();

        let snapshot = engine
            .leaderboard
            .leaderboard(LeaderboardWindow::AllTime, carol, now)
            .await
            .unwrap();

        // Signups that only signed up (no payment) are not "active"; the
        // five paying-signup agents each show their own zero standing too.
        let alice_entry = snapshot
            .entries
            .iter()
            .find(|e| e.user_id == alice)
            .unwrap();
        assert_eq!(alice_entry.rank, 1);
        assert_eq!(alice_entry.active_referrals, 3);
        let bob_entry = snapshot.entries.iter().find(|e| e.user_id == bob).unwrap();
        assert_eq!(bob_entry.rank, 2);
        assert_eq!(bob_entry.active_referrals, 1);

        let carol_standing = snapshot.viewer.unwrap();
        assert_eq!(carol_standing.active_referrals, 0);
        assert_eq!(carol_standing.tier, "bronze");
    }

    #[tokio::test]
    async fn test_month_window_excludes_last_months_rewards() {
        let engine = Engine::new();
        let now = fixed_now();
        let last_month = now - chrono::Duration::days(40);

        let alice = engine.agent("Alice Avery").await;
        let old_referred = engine.agent("Old Signup").await;
        assert!(engine.refer(alice, old_referred).await.captured());
        engine.pay(old_referred, "tx_old", last_month).await.unwrap();

        let month = engine
            .leaderboard
            .leaderboard(LeaderboardWindow::Month, alice, now)
            .await
            .unwrap();
        assert_eq!(month.viewer.unwrap().active_referrals, 0);

        let all_time = engine
            .leaderboard
            .leaderboard(LeaderboardWindow::AllTime, alice, now)
            .await
            .unwrap();
        assert_eq!(all_time.viewer.unwrap().active_referrals, 1);
    }

    #[tokio::test]
    async fn test_disabled_program_stops_new_rewards_only() {
        let engine = Engine::new();
        let users = chain(&engine, 2).await;
        let (referrer, referred) = (users[0], users[1]);

        engine.pay(referred, "tx_before", fixed_now()).await.unwrap();

        let mut off = default_policy();
        off.enabled = false;
        engine.policy.set(off);

        let report = engine.pay(referred, "tx_after", fixed_now()).await.unwrap();
        assert_eq!(report.issued, 0);

        // The earlier credit is untouched.
        assert_eq!(
            engine
                .rewards
                .balance(referrer, CreditType::ListingCredit)
                .await
                .unwrap(),
            5
        );
    }
}
