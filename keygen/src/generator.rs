use tracing::debug;
use tracing::warn;

use crate::errors::KeygenError;
use crate::scramble::scramble;
use crate::scramble::scramble_range;
use crate::scramble::ALPHANUMERIC;

/// Existence check against the live record set.
///
/// Implemented by the data layer over whatever store holds the records.
/// The generator treats it as a plain synchronous predicate and never
/// caches results: the record set can change between this check and the
/// caller's eventual insert, so the caller still retries on a downstream
/// unique-constraint violation.
pub trait UniquenessOracle {
    /// True if `candidate` is already in use.
    fn exists(&self, candidate: &str) -> bool;
}

/// Generator for short identifiers guaranteed free at generation time.
///
/// Stateless over its alphabet and retry budget; safe to share across
/// threads.
pub struct IdentifierGenerator {
    alphabet: Vec<u8>,
    max_attempts: usize,
}

impl IdentifierGenerator {
    /// Retry budget before a generation call gives up.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

    /// Create a generator over the alphanumeric alphabet with the default
    /// retry budget.
    pub fn new() -> Self {
        Self {
            alphabet: ALPHANUMERIC.to_vec(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replace the identifier alphabet.
    ///
    /// # Panics
    /// Panics if `alphabet` is empty.
    pub fn with_alphabet(mut self, alphabet: &[u8]) -> Self {
        assert!(!alphabet.is_empty(), "alphabet must not be empty");
        self.alphabet = alphabet.to_vec();
        self
    }

    /// Replace the retry budget.
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        assert!(max_attempts > 0, "max_attempts must be positive");
        self.max_attempts = max_attempts;
        self
    }

    /// Derive an identifier from a human-meaningful seed, e.g. the local
    /// part of a contact handle.
    ///
    /// Takes the literal prefix of `seed` up to `length` characters and
    /// pads any shortfall with random characters, retrying with a fresh
    /// suffix while the oracle reports the candidate as taken. When the
    /// seed alone fills the whole identifier the candidate cannot vary
    /// across retries, so a taken candidate exhausts the budget instead of
    /// looping.
    ///
    /// # Errors
    /// * `SpaceExhausted` - No free candidate within the retry budget
    pub fn derive_unique<O: UniquenessOracle>(
        &self,
        seed: &str,
        length: usize,
        oracle: &O,
    ) -> Result<String, KeygenError> {
        let prefix: String = seed.chars().take(length).collect();
        let shortfall = length - prefix.chars().count();

        self.attempt_unique(oracle, || {
            if shortfall == 0 {
                return prefix.clone();
            }

            let mut candidate = String::with_capacity(prefix.len() + shortfall);
            candidate.push_str(&prefix);
            candidate.push_str(&scramble(&self.alphabet, shortfall));
            candidate
        })
    }

    /// Mint a fully random identifier of exactly `length` characters, for
    /// opaque record indices.
    ///
    /// # Errors
    /// * `SpaceExhausted` - No free candidate within the retry budget
    pub fn random_unique<O: UniquenessOracle>(
        &self,
        length: usize,
        oracle: &O,
    ) -> Result<String, KeygenError> {
        self.attempt_unique(oracle, || scramble(&self.alphabet, length))
    }

    /// Random key with a length drawn from `[min_length, max_length]` and
    /// no uniqueness check; for callers that handle collisions themselves.
    pub fn random_key(&self, min_length: usize, max_length: usize) -> String {
        scramble_range(&self.alphabet, min_length, max_length)
    }

    fn attempt_unique<O, F>(&self, oracle: &O, mut candidate: F) -> Result<String, KeygenError>
    where
        O: UniquenessOracle,
        F: FnMut() -> String,
    {
        for attempt in 1..=self.max_attempts {
            let next = candidate();
            if !oracle.exists(&next) {
                return Ok(next);
            }
            debug!(candidate = %next, attempt, "Identifier already taken, retrying");
        }

        warn!(
            max_attempts = self.max_attempts,
            "Identifier space exhausted"
        );
        Err(KeygenError::SpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}
