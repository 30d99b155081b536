//! Integration test: XP ladder, stat allocation, and the answer pipeline
//!
//! Drives learners through many answers and point spends and checks that
//! XP is conserved, levels never go backwards, and allocated plus unspent
//! points always match what the ladder has granted.

use quest_tutor::character::{allocate, StatName};
use quest_tutor::progression::{Difficulty, LevelThreshold, ThresholdTable};
use quest_tutor::{Answer, ProgressionError, TutorConfig, TutorEngine};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn spec_table() -> ThresholdTable {
    ThresholdTable::new(vec![
        LevelThreshold { level: 1, xp_required: 0, stat_points: 0 },
        LevelThreshold { level: 2, xp_required: 100, stat_points: 3 },
        LevelThreshold { level: 3, xp_required: 300, stat_points: 3 },
        LevelThreshold { level: 4, xp_required: 600, stat_points: 4 },
    ])
    .expect("valid table")
}

// =============================================================================
// Ladder
// =============================================================================

#[test]
fn test_crossing_one_threshold() {
    let outcome = spec_table().advance(1, 90, 20).unwrap();
    assert_eq!(outcome.new_level, 2);
    assert_eq!(outcome.stat_points_awarded, 3);
    assert!(outcome.leveled_up);
}

#[test]
fn test_crossing_two_thresholds_sums_grants() {
    let outcome = spec_table().advance(1, 50, 300).unwrap();
    assert_eq!(outcome.new_level, 3);
    assert_eq!(outcome.stat_points_awarded, 6);
    assert_eq!(outcome.new_xp, 350);
}

#[test]
fn test_xp_conserved_and_level_monotonic() {
    let table = TutorConfig::default().threshold_table().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let (mut level, mut xp) = (1u32, 0u64);

    for _ in 0..2_000 {
        let gained = rng.gen_range(0..500u64);
        let outcome = table.advance(level, xp, gained).unwrap();
        assert_eq!(outcome.new_xp, xp + gained);
        assert!(outcome.new_level >= level);
        assert_eq!(outcome.leveled_up, outcome.new_level > level);
        assert_eq!(outcome.new_level, table.level_for_xp(outcome.new_xp));
        level = outcome.new_level;
        xp = outcome.new_xp;
    }
}

#[test]
fn test_advance_is_deterministic() {
    let table = spec_table();
    assert_eq!(table.advance(2, 150, 500), table.advance(2, 150, 500));
}

// =============================================================================
// StatAllocator
// =============================================================================

#[test]
fn test_overspend_always_fails_unchanged() {
    let engine = TutorEngine::new(TutorConfig::default()).unwrap();
    let mut learner = engine.new_learner("Ada".to_string());
    learner.character.unspent_stat_points = 4;
    let before = learner.character.clone();

    for points in 5..20 {
        for stat in StatName::all() {
            let err = allocate(&learner.character, stat.as_str(), points).unwrap_err();
            assert!(matches!(err, ProgressionError::InsufficientPoints { .. }));
        }
    }
    assert_eq!(learner.character, before);
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn test_allocation_invariant_holds_through_session() {
    let engine = TutorEngine::new(TutorConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut learner = engine.new_learner("Ada".to_string());

    for step in 0..1_500i64 {
        let answer = Answer {
            difficulty: match rng.gen_range(0..3) {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            },
            correct: rng.gen_bool(0.75),
        };
        let before_xp = learner.character.total_xp;
        let before_level = learner.character.level;

        let outcome = engine.answer_question(&learner, answer, step).unwrap();
        learner = outcome.snapshot;
        assert!(learner.character.total_xp > before_xp);
        assert!(learner.character.level >= before_level);

        // Spend a random amount of whatever is available, sometimes.
        if learner.character.unspent_stat_points > 0 && rng.gen_bool(0.5) {
            let points = rng.gen_range(1..=learner.character.unspent_stat_points);
            let stat = StatName::all()[rng.gen_range(0..6)];
            learner = engine
                .spend_points(&learner, stat.as_str(), points, step)
                .unwrap()
                .snapshot;
        }

        learner
            .character
            .check_allocation(engine.table())
            .expect("allocated + unspent == granted");
    }

    assert!(learner.character.level > 1);
}

#[test]
fn test_progress_reports_remaining_xp() {
    let engine = TutorEngine::new(TutorConfig::default()).unwrap();
    let learner = engine.new_learner("Ada".to_string());
    let outcome = engine
        .answer_question(
            &learner,
            Answer {
                difficulty: Difficulty::Hard,
                correct: true,
            },
            0,
        )
        .unwrap();

    let progress = engine.progress(&outcome.snapshot.character).unwrap();
    assert_eq!(progress.level, 1);
    assert_eq!(progress.xp_into_level, 35);
    assert_eq!(progress.xp_to_next, Some(65));
}

#[test]
fn test_custom_ladder_config() {
    let mut config = TutorConfig::default();
    config.ladder.xp_curve_base = 10.0;
    config.ladder.xp_curve_exponent = 1.0;
    config.ladder.max_level = 3;
    config.ladder.stat_points_per_level = 2;
    let engine = TutorEngine::new(config).unwrap();

    // Thresholds: L2 at 10, L3 at 10 + 20 = 30.
    let learner = engine.new_learner("Ada".to_string());
    let outcome = engine
        .answer_question(
            &learner,
            Answer {
                difficulty: Difficulty::Hard,
                correct: true,
            },
            0,
        )
        .unwrap();
    assert_eq!(outcome.snapshot.character.level, 3);
    assert_eq!(outcome.snapshot.character.unspent_stat_points, 4);
}
