//! Runs simulated learners through the real engine.

use super::config::SimConfig;
use super::report::{LearnerStats, SimReport};
use crate::character::StatName;
use crate::core::error::Result;
use crate::progression::Difficulty;
use crate::tutor::{Answer, TutorEngine};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Run the full simulation and return a report.
pub fn run_simulation(engine: &TutorEngine, config: &SimConfig) -> Result<SimReport> {
    let mut learners = Vec::with_capacity(config.num_learners as usize);

    for idx in 0..config.num_learners {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_learner(engine, config, idx, &mut rng)?;
        if config.verbosity >= 2 {
            println!(
                "Learner {}/{} - Level {}, XP {}, Achievements {}",
                idx + 1,
                config.num_learners,
                stats.final_level,
                stats.total_xp,
                stats.unlocked.len()
            );
        }
        learners.push(stats);
    }

    Ok(SimReport::from_learners(
        learners,
        engine.evaluator().catalog(),
        config.sample_every,
    ))
}

fn simulate_learner(
    engine: &TutorEngine,
    config: &SimConfig,
    idx: u32,
    rng: &mut ChaCha8Rng,
) -> Result<LearnerStats> {
    let accuracy = config.effective_accuracy();
    let quiz_length = config.quiz_length.max(1);
    let sample_every = config.sample_every.max(1);

    let mut learner = engine.new_learner(format!("Sim {}", idx + 1));
    let mut level_samples = Vec::new();
    let mut quiz_mistakes = 0u32;

    for question in 1..=config.questions_per_learner {
        let now = question as i64;
        let answer = Answer {
            difficulty: DIFFICULTIES[rng.gen_range(0..DIFFICULTIES.len())],
            correct: rng.gen_bool(accuracy),
        };
        if !answer.correct {
            quiz_mistakes += 1;
        }
        learner = engine.answer_question(&learner, answer, now)?.snapshot;

        if question % quiz_length == 0 {
            learner = engine
                .complete_quiz(&learner, quiz_mistakes == 0, now)
                .snapshot;
            quiz_mistakes = 0;
        }

        while learner.character.unspent_stat_points > 0 {
            let stat = StatName::all()[rng.gen_range(0..StatName::all().len())];
            learner = engine.spend_points(&learner, stat.as_str(), 1, now)?.snapshot;
        }

        if question % sample_every == 0 {
            level_samples.push(learner.character.level);
        }
    }

    Ok(LearnerStats {
        final_level: learner.character.level,
        total_xp: learner.character.total_xp,
        level_samples,
        unlocked: learner.achievements.unlocked_ids(),
    })
}
