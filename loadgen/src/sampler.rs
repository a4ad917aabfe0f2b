use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::corpus::QuestionCorpus;

/// Source of the two random values a request needs. Injected into the task so
/// tests can substitute a deterministic implementation.
pub trait Sampler {
    /// Picks one question uniformly at random from the corpus.
    fn next_question<'a>(&mut self, corpus: &'a QuestionCorpus) -> &'a str;

    /// Returns a fresh session identifier, never reused across requests.
    fn next_session_id(&mut self) -> String;
}

/// Production sampler: seedable PRNG for question selection, random UUID v4
/// for session identifiers. Seeding reproduces the question sequence; session
/// identifiers stay random regardless of the seed.
#[derive(Debug)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn next_question<'a>(&mut self, corpus: &'a QuestionCorpus) -> &'a str {
        // QuestionCorpus rejects empty lists, so the range is never empty.
        let index = self.rng.gen_range(0..corpus.len());
        &corpus.questions()[index]
    }

    fn next_session_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
