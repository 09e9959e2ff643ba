//! Runtime configuration for the quiz services.

use std::path::PathBuf;

/// Locations and limits the quiz services operate with.
#[derive(Clone, Debug)]
pub struct QuizConfig {
    /// Root directory of the per-domain question banks.
    pub bank_dir: PathBuf,
    /// Directory holding one JSON document per quiz session.
    pub state_dir: PathBuf,
    /// Lab topology description used for remediation configs.
    pub topology_path: PathBuf,
    /// Directory generated router configs are written to.
    pub output_dir: PathBuf,
    /// How many questions a new session samples from the bank.
    pub num_questions: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_dir: PathBuf::from("question_bank"),
            state_dir: PathBuf::from("quiz_state"),
            topology_path: PathBuf::from("gns3_topology.json"),
            output_dir: PathBuf::from("gns3_configs"),
            num_questions: 10,
        }
    }
}

impl QuizConfig {
    /// Read overrides from `QUIZME_*` environment variables, falling back to
    /// the defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            bank_dir: std::env::var("QUIZME_BANK_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.bank_dir),
            state_dir: std::env::var("QUIZME_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.state_dir),
            topology_path: std::env::var("QUIZME_TOPOLOGY_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.topology_path),
            output_dir: std::env::var("QUIZME_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.output_dir),
            num_questions: std::env::var("QUIZME_NUM_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.num_questions),
        }
    }
}
