mod controller;
mod sampler;
pub mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use controller::{QuizRequest, SessionController};
pub use sampler::sample_questions;
