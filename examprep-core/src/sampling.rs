//! Random selection of practice and exam questions
//!
//! Randomness is injected through the [`Sampler`] trait. Production code uses
//! [`ThreadRngSampler`], which draws from the thread-local generator on every
//! call and shares nothing between requests. Tests and reproducible demos use
//! [`StdRngSampler::with_seed`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::bank::QuestionBank;
use crate::error::ExamError;
use crate::question::Question;

/// Source of uniform random draws
pub trait Sampler: Send + Sync {
    /// A uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;

    /// `amount` distinct indices from `0..len`, in draw order.
    /// `amount` must not exceed `len`.
    fn distinct(&self, len: usize, amount: usize) -> Vec<usize>;
}

/// Sampler backed by `rand::thread_rng()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn distinct(&self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut rand::thread_rng(), len, amount).into_vec()
    }
}

/// Sampler backed by a single mutex-guarded `StdRng`
pub struct StdRngSampler {
    rng: Mutex<StdRng>,
}

impl StdRngSampler {
    /// Create a sampler seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a sampler with a specific seed (for testing)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic mid-draw leaves the generator usable
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StdRngSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StdRngSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdRngSampler").finish_non_exhaustive()
    }
}

impl Sampler for StdRngSampler {
    fn index(&self, len: usize) -> usize {
        self.rng().gen_range(0..len)
    }

    fn distinct(&self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut *self.rng(), len, amount).into_vec()
    }
}

/// Draw one question of `subject` uniformly at random
///
/// Draws are independent; the same question can come up twice in a row.
pub fn pick_one<'a>(
    bank: &'a QuestionBank,
    subject: &str,
    sampler: &dyn Sampler,
) -> Result<&'a Question, ExamError> {
    let questions = bank
        .subject(subject)
        .ok_or_else(|| ExamError::SubjectNotFound(subject.to_string()))?;

    questions
        .get(sampler.index(questions.len()))
        .ok_or_else(|| ExamError::SubjectNotFound(subject.to_string()))
}

/// Draw `count` distinct questions from the whole bank, in draw order
pub fn pick_exam_set<'a>(
    bank: &'a QuestionBank,
    count: usize,
    sampler: &dyn Sampler,
) -> Result<Vec<&'a Question>, ExamError> {
    let questions = bank.questions();
    if questions.len() < count {
        return Err(ExamError::InsufficientData {
            available: questions.len(),
            required: count,
        });
    }

    Ok(sampler
        .distinct(questions.len(), count)
        .into_iter()
        .map(|position| &questions[position])
        .collect())
}
