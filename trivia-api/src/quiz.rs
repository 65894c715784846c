//! Picks the next quiz question from the candidates a player has not seen.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared_types::Question;
use std::collections::HashSet;

/// How the next question is chosen among the remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizSelection {
    /// Uniformly at random.
    #[default]
    Random,
    /// Lowest id first, so a round always plays in the same order.
    First,
}

/// Category id 0 is the play screen's "All" entry.
pub fn category_filter(quiz_category_id: i64) -> Option<i64> {
    if quiz_category_id == 0 {
        None
    } else {
        Some(quiz_category_id)
    }
}

/// Returns `None` once every candidate appears in `previous`.
///
/// `candidates` must already be restricted to the quiz category and sorted
/// by id.
pub fn select_question<R>(
    candidates: Vec<Question>,
    previous: &[i64],
    selection: QuizSelection,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !seen.contains(&question.id))
        .collect();

    match selection {
        QuizSelection::First => remaining.into_iter().next(),
        QuizSelection::Random => remaining.choose(rng).cloned(),
    }
}
