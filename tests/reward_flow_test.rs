//! Integration test: reward flows through the engine
//!
//! Exercises every action a player can take against the built-in content:
//! spin wheel, treasure hunt, chest unlocks, daily rewards and tournaments.
//! Also checks the cross-cutting concerns: the gold floor, achievement
//! rewards chained onto the triggering action, sound cues and account
//! persistence.

use clash_rewards::achievements::AchievementKind;
use clash_rewards::chests::ChestState;
use clash_rewards::core::constants::MS_PER_DAY;
use clash_rewards::rewards::{RewardPayload, Resource};
use clash_rewards::{
    ClaimError, EngineError, PlayerAccount, PlayerProgressSnapshot, PlayerResources, RewardEngine,
    SoundCue,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn engine() -> RewardEngine {
    RewardEngine::builtin().unwrap()
}

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

// =============================================================================
// Resolver behavior via grant
// =============================================================================

#[test]
fn test_trap_clamps_gold_at_zero() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    account.resources.gold = 30;

    let trap = RewardPayload::new().with(Resource::Gold, -50);
    let outcome = engine.grant("Trap!", &trap, &mut account, &snapshot).unwrap();

    assert_eq!(account.resources.gold, 0);
    // Summary mirrors what was applied, not what was asked for
    assert_eq!(outcome.reward.gold, -30);
    assert_eq!(outcome.cue, SoundCue::Error);
}

#[test]
fn test_empty_payload_is_a_click() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();

    let outcome = engine
        .grant("Nothing here", &RewardPayload::new(), &mut account, &snapshot)
        .unwrap();

    assert!(outcome.reward.is_empty());
    assert_eq!(outcome.cue, SoundCue::Click);
    assert_eq!(account.resources, PlayerResources::default());
}

#[test]
fn test_effects_pass_through_untouched() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();

    let boost = RewardPayload::new()
        .with_effect("damage", 0.25)
        .with_effect("elixir", 1);
    let outcome = engine.grant("Mega Boost", &boost, &mut account, &snapshot).unwrap();

    assert_eq!(outcome.reward.effects.len(), 2);
    assert_eq!(outcome.reward.effects["damage"], serde_json::json!(0.25));
    assert_eq!(account.resources, PlayerResources::default());
}

#[test]
fn test_unknown_chest_leaves_account_untouched() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();

    let payload = RewardPayload::new()
        .with(Resource::Gold, 100)
        .with_chest("mythic");
    assert!(engine.grant("bad", &payload, &mut account, &snapshot).is_err());

    assert_eq!(account.resources.gold, 0);
    assert!(account.chests.is_empty());
}

// =============================================================================
// Table actions
// =============================================================================

#[test]
fn test_spin_wheel_many_times_stays_consistent() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let mut rng = create_test_rng();

    let mut gold_total = 0;
    for _ in 0..200 {
        let outcome = engine.spin_wheel(&mut account, &snapshot, &mut rng).unwrap();
        gold_total += outcome.total_gold();
        assert!(outcome.achievements.is_empty());
    }

    assert_eq!(account.resources.gold, gold_total);
    assert!(account.resources.gems > 0);
}

#[test]
fn test_treasure_hunt_gold_never_negative() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let mut rng = create_test_rng();

    let mut saw_trap = false;
    for _ in 0..300 {
        let outcome = engine.treasure_hunt(&mut account, &snapshot, &mut rng).unwrap();
        saw_trap |= outcome.source == "Trap!";
        assert!(account.resources.gold >= 0);
    }
    assert!(saw_trap);
}

// =============================================================================
// Achievements chained onto actions
// =============================================================================

#[test]
fn test_achievements_granted_once() {
    let engine = engine();
    let mut account = PlayerAccount::default();
    let mut rng = create_test_rng();
    let snapshot = PlayerProgressSnapshot {
        wins: 1,
        clan_membership: Some("Night Owls".to_string()),
        ..Default::default()
    };

    let first = engine.spin_wheel(&mut account, &snapshot, &mut rng).unwrap();
    let ids: Vec<&str> = first.achievements.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["first_victory", "team_player"]);
    assert_eq!(first.cue, SoundCue::Notification);

    for _ in 0..20 {
        let outcome = engine.spin_wheel(&mut account, &snapshot, &mut rng).unwrap();
        assert!(outcome.achievements.is_empty());
    }
    assert_eq!(account.completion.completed_count(), 2);
}

#[test]
fn test_challenge_completes_as_progress_grows() {
    let engine = engine();
    let mut account = PlayerAccount::default();
    let mut snapshot = PlayerProgressSnapshot {
        wins: 9,
        clan_membership: Some("Night Owls".to_string()),
        ..Default::default()
    };
    engine.check_achievements(&mut account, &snapshot).unwrap();
    assert!(account.chests.is_empty());

    snapshot.wins = 10;
    let rewards = engine.check_achievements(&mut account, &snapshot).unwrap();

    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0].id, "clan_warrior");
    assert_eq!(rewards[0].kind, AchievementKind::Challenge);
    assert_eq!(rewards[0].summary.chest.as_deref(), Some("magic"));
    assert_eq!(account.chests.len(), 1);
}

// =============================================================================
// Chests
// =============================================================================

#[test]
fn test_chest_unlock_lifecycle() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let mut rng = create_test_rng();
    let start = 1_700_000_000_000;

    engine
        .grant("gift", &RewardPayload::new().with_chest("silver"), &mut account, &snapshot)
        .unwrap();
    assert_eq!(
        engine.chest_status(&account, start),
        vec![("silver".to_string(), ChestState::Locked)]
    );

    engine.start_chest_unlock(&mut account, 0, start).unwrap();
    let status = engine.chest_status(&account, start + 1_000);
    assert_eq!(
        status[0].1,
        ChestState::Unlocking {
            remaining: "2h 59m".to_string()
        }
    );

    let early = engine.open_chest(&mut account, &snapshot, 0, start + 1_000, &mut rng);
    assert!(matches!(
        early,
        Err(EngineError::Claim(ClaimError::ChestLocked { remaining_ms: 10_799_000 }))
    ));

    let done = start + 3 * 3_600_000;
    assert_eq!(engine.chest_status(&account, done)[0].1, ChestState::Ready);
    let outcome = engine
        .open_chest(&mut account, &snapshot, 0, done, &mut rng)
        .unwrap();
    assert!((80..=160).contains(&outcome.reward.gold));
    assert_eq!(outcome.cards, 6);
    assert!(account.chests.is_empty());
}

#[test]
fn test_only_one_chest_unlocks_at_a_time() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let two = RewardPayload::new().with_chest("wooden");
    engine.grant("a", &two, &mut account, &snapshot).unwrap();
    engine.grant("b", &two, &mut account, &snapshot).unwrap();

    engine.start_chest_unlock(&mut account, 0, 0).unwrap();
    assert!(matches!(
        engine.start_chest_unlock(&mut account, 1, 1_000),
        Err(EngineError::Claim(ClaimError::UnlockInProgress { remaining_ms: 4_000 }))
    ));

    // Once the first finishes the second may start
    assert!(engine.start_chest_unlock(&mut account, 1, 5_000).is_ok());
}

#[test]
fn test_open_missing_slot() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let mut rng = create_test_rng();
    assert!(matches!(
        engine.open_chest(&mut account, &snapshot, 3, 0, &mut rng),
        Err(EngineError::Claim(ClaimError::NoSuchChest { index: 3 }))
    ));
}

// =============================================================================
// Daily rewards
// =============================================================================

#[test]
fn test_daily_streak_walks_the_track() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let day = MS_PER_DAY as i64;

    let sources: Vec<String> = (0..8)
        .map(|i| {
            engine
                .claim_daily(&mut account, &snapshot, i * day)
                .unwrap()
                .source
        })
        .collect();

    assert_eq!(sources[0], "Day 1");
    assert_eq!(sources[6], "Day 7");
    // The track wraps after its last day
    assert_eq!(sources[7], "Day 1");
    assert_eq!(account.daily.streak, 8);
}

#[test]
fn test_daily_streak_resets_after_missed_day() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();
    let day = MS_PER_DAY as i64;

    engine.claim_daily(&mut account, &snapshot, 0).unwrap();
    engine.claim_daily(&mut account, &snapshot, day).unwrap();
    let outcome = engine.claim_daily(&mut account, &snapshot, 4 * day).unwrap();

    assert_eq!(outcome.source, "Day 1");
    assert_eq!(account.daily.streak, 1);
}

#[test]
fn test_daily_refused_inside_cooldown() {
    let engine = engine();
    let snapshot = PlayerProgressSnapshot::default();
    let mut account = PlayerAccount::default();

    engine.claim_daily(&mut account, &snapshot, 0).unwrap();
    let gold = account.resources.gold;
    let refused = engine.claim_daily(&mut account, &snapshot, 3_600_000);

    assert!(matches!(
        refused,
        Err(EngineError::Claim(ClaimError::DailyNotReady { remaining_ms })) if remaining_ms == MS_PER_DAY - 3_600_000
    ));
    assert_eq!(account.resources.gold, gold);
}

// =============================================================================
// Tournaments
// =============================================================================

#[test]
fn test_tournament_requires_gems() {
    let engine = engine();
    let mut account = PlayerAccount::default();
    account.resources.gems = 5;

    assert_eq!(
        engine.enter_tournament(&mut account, "weekend_cup", 0),
        Err(ClaimError::InsufficientGems { have: 5, need: 10 })
    );
    assert_eq!(account.resources.gems, 5);
    assert!(account.tournaments.is_empty());
}

#[test]
fn test_tournament_cannot_be_entered_twice() {
    let engine = engine();
    let mut account = PlayerAccount::default();
    account.resources.gems = 50;

    engine.enter_tournament(&mut account, "weekend_cup", 0).unwrap();
    assert_eq!(
        engine.enter_tournament(&mut account, "weekend_cup", 10),
        Err(ClaimError::AlreadyEntered {
            id: "weekend_cup".to_string()
        })
    );
    assert_eq!(account.resources.gems, 40);
}

#[test]
fn test_unknown_tournament() {
    let engine = engine();
    let mut account = PlayerAccount::default();
    assert_eq!(
        engine.enter_tournament(&mut account, "nope", 0),
        Err(ClaimError::UnknownTournament {
            id: "nope".to_string()
        })
    );
}

// =============================================================================
// Persistence round trip
// =============================================================================

#[test]
fn test_account_survives_serialization_mid_session() {
    let engine = engine();
    let mut rng = create_test_rng();
    let snapshot = PlayerProgressSnapshot {
        wins: 1,
        ..Default::default()
    };
    let mut account = PlayerAccount::default();
    account.resources.gems = 20;

    engine.spin_wheel(&mut account, &snapshot, &mut rng).unwrap();
    engine.claim_daily(&mut account, &snapshot, 0).unwrap();
    engine.enter_tournament(&mut account, "weekend_cup", 0).unwrap();

    let json = serde_json::to_string(&account).unwrap();
    let mut restored: PlayerAccount = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, account);

    // Completed achievements stay completed after reload
    let outcome = engine
        .grant("again", &RewardPayload::new(), &mut restored, &snapshot)
        .unwrap();
    assert!(outcome.achievements.is_empty());
}

#[test]
fn test_upgrade_costs_rise_with_level() {
    let engine = engine();
    assert_eq!(engine.upgrade_cost(4, "epic"), 240);
    assert_eq!(engine.upgrade_cost(4, "mystery"), engine.upgrade_cost(4, "common"));
    for level in 1..20 {
        assert!(engine.upgrade_cost(level + 1, "rare") > engine.upgrade_cost(level, "rare"));
    }
}
