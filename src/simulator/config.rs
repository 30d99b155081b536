//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated learners
    pub num_learners: u32,

    /// Questions each learner answers
    pub questions_per_learner: u32,

    /// Probability of answering correctly (clamped to 0.0 - 1.0)
    pub accuracy: f64,

    /// Questions per quiz; a quiz is perfect when every answer is correct
    pub quiz_length: u32,

    /// Level curve sample interval, in questions
    pub sample_every: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_learners: 200,
            questions_per_learner: 1_000,
            accuracy: 0.7,
            quiz_length: 10,
            sample_every: 100,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, seeded config for quick balance checks
    pub fn quick(seed: u64) -> Self {
        Self {
            num_learners: 20,
            questions_per_learner: 200,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Accuracy clamped to 0.0 - 1.0; non-finite values use the default 0.7.
    pub fn effective_accuracy(&self) -> f64 {
        if self.accuracy.is_finite() {
            self.accuracy.clamp(0.0, 1.0)
        } else {
            Self::default().accuracy
        }
    }
}
