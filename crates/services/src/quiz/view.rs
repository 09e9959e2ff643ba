//! Plain-text rendering of quiz replies.

use trainer_core::model::{AnswerOutcome, QuestionRecord, QuizSession, Topic};

/// Greeting with the full topic list, shown when no session exists and no
/// topic was given.
#[must_use]
pub fn welcome() -> String {
    let mut text = String::from(
        "Welcome to the CCNP Trainer Quiz!\n\nPlease choose a topic to get started.\n\nAvailable topics:\n",
    );
    let topics: Vec<String> = Topic::ALL.iter().map(|t| format!("- {t}")).collect();
    text.push_str(&topics.join("\n"));
    text.push_str("\n\nTo start a quiz, use the command: /quizme topic=\"<topic_name>\"");
    text
}

/// Render the question at zero-based `index` with its lettered options.
///
/// Options print in letter order, one per line, indented two spaces.
#[must_use]
pub fn question(index: usize, record: &QuestionRecord) -> String {
    let mut text = format!("Question {}: {}\n", index + 1, record.question);
    for (letter, option) in &record.options {
        text.push_str(&format!("  {letter}: {option}\n"));
    }
    text
}

/// One-line verdict for a graded answer.
#[must_use]
pub fn feedback(outcome: &AnswerOutcome) -> String {
    if outcome.correct {
        "Correct!".to_string()
    } else {
        format!("Wrong! The correct answer is {}.", outcome.correct_answer)
    }
}

/// Final score line for a finished session.
#[must_use]
pub fn report(session: &QuizSession) -> String {
    format!(
        "You scored {:.2}%. You answered {} out of {} questions correctly.",
        session.final_score(),
        session.score(),
        session.total()
    )
}
