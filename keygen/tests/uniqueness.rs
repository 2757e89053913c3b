use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use keygen::IdentifierGenerator;
use keygen::KeygenError;
use keygen::UniquenessOracle;

/// Oracle that records every candidate it is asked about, treating a
/// repeated question as a collision. Mirrors a store where the first
/// check-then-insert wins.
struct ClaimingOracle {
    seen: Mutex<HashSet<String>>,
}

impl ClaimingOracle {
    fn new() -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
        }
    }
}

impl UniquenessOracle for ClaimingOracle {
    fn exists(&self, candidate: &str) -> bool {
        !self.seen.lock().unwrap().insert(candidate.to_string())
    }
}

#[test]
fn concurrent_random_unique_never_duplicates() {
    let oracle = Arc::new(ClaimingOracle::new());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let oracle = Arc::clone(&oracle);
        handles.push(thread::spawn(move || {
            let generator = IdentifierGenerator::new();
            (0..50)
                .map(|_| {
                    generator
                        .random_unique(8, oracle.as_ref())
                        .expect("Failed to generate identifier")
                })
                .collect::<Vec<_>>()
        }));
    }

    let mut all = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("Generator thread panicked") {
            assert!(all.insert(id), "two calls returned the same identifier");
        }
    }
    assert_eq!(all.len(), 8 * 50);
}

#[test]
fn derive_unique_disambiguates_popular_seeds() {
    let oracle = ClaimingOracle::new();
    let generator = IdentifierGenerator::new();

    // Many registrations sharing the same handle prefix.
    let mut ids = HashSet::new();
    for _ in 0..20 {
        let id = generator
            .derive_unique("ab", 12, &oracle)
            .expect("Failed to derive identifier");
        assert_eq!(id.len(), 12);
        assert!(id.starts_with("ab"));
        assert!(ids.insert(id));
    }
}

#[test]
fn tiny_space_exhausts_instead_of_spinning() {
    let oracle = ClaimingOracle::new();
    let generator = IdentifierGenerator::new()
        .with_alphabet(b"a")
        .with_max_attempts(4);

    // Single possible candidate: the first call claims it, the second must
    // give up after its budget.
    assert_eq!(generator.random_unique(3, &oracle).unwrap(), "aaa");
    assert_eq!(
        generator.random_unique(3, &oracle),
        Err(KeygenError::SpaceExhausted { attempts: 4 })
    );
}
