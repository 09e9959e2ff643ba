use rand::Rng;
use rand::seq::SliceRandom;

use trainer_core::model::QuestionRecord;

/// Draw `count` distinct questions from `bank` in random order.
///
/// Returns `None` when the bank holds fewer than `count` records; the caller
/// turns that into a user-facing shortage message.
#[must_use]
pub fn sample_questions<R: Rng + ?Sized>(
    rng: &mut R,
    bank: &[QuestionRecord],
    count: usize,
) -> Option<Vec<QuestionRecord>> {
    if bank.len() < count {
        return None;
    }
    let mut pool = bank.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    Some(pool)
}
