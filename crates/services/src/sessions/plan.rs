use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Draw up to `count` questions from `bank` in uniformly random order.
///
/// The bank is copied, shuffled, and truncated, so every permutation is
/// equally likely and no question repeats. `count` is clamped to the bank size.
#[must_use]
pub fn sample(bank: &[Question], count: usize) -> Vec<Question> {
    let mut rng = rng();
    sample_with(&mut rng, bank, count)
}

/// Same as [`sample`] with a caller-provided RNG.
#[must_use]
pub fn sample_with<R: Rng + ?Sized>(rng: &mut R, bank: &[Question], count: usize) -> Vec<Question> {
    let mut drawn = bank.to_vec();
    drawn.as_mut_slice().shuffle(rng);
    drawn.truncate(count);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn build_question(id: usize) -> Question {
        Question::new(
            QuestionId::new(format!("q{id}")).unwrap(),
            format!("Question {id}"),
            vec!["a".into(), "b".into(), "c".into()],
            id % 3,
            None,
        )
        .unwrap()
    }

    fn build_bank(len: usize) -> Vec<Question> {
        (0..len).map(build_question).collect()
    }

    #[test]
    fn sample_never_repeats_questions() {
        let bank = build_bank(10);
        let mut rng = StdRng::seed_from_u64(7);
        for count in 0..=12 {
            let drawn = sample_with(&mut rng, &bank, count);
            assert_eq!(drawn.len(), count.min(bank.len()));
            let ids: HashSet<_> = drawn.iter().map(|q| q.id().clone()).collect();
            assert_eq!(ids.len(), drawn.len());
        }
    }

    #[test]
    fn sample_clamps_to_bank_size() {
        let bank = build_bank(3);
        let drawn = sample(&bank, 10);
        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn sample_does_not_mutate_bank() {
        let bank = build_bank(6);
        let before = bank.clone();
        let _ = sample(&bank, 4);
        assert_eq!(bank, before);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let bank = build_bank(8);
        let a = sample_with(&mut StdRng::seed_from_u64(42), &bank, 8);
        let b = sample_with(&mut StdRng::seed_from_u64(42), &bank, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn every_permutation_of_three_shows_up() {
        let bank = build_bank(3);
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen: HashMap<Vec<String>, usize> = HashMap::new();
        for _ in 0..3_000 {
            let order = sample_with(&mut rng, &bank, 3)
                .iter()
                .map(|q| q.id().to_string())
                .collect();
            *seen.entry(order).or_default() += 1;
        }
        assert_eq!(seen.len(), 6);
        for (order, hits) in seen {
            assert!(hits > 350, "{order:?} drawn only {hits} times");
        }
    }
}
