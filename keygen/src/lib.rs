//! Identifier generation library
//!
//! Produces short random identifiers over an alphanumeric alphabet and
//! resolves collisions against a caller-supplied uniqueness oracle:
//! - [`scramble`] / [`scramble_range`]: the randomization primitive
//! - [`IdentifierGenerator::derive_unique`]: identifiers seeded from a
//!   human-meaningful prefix, e.g. the local part of a contact handle
//! - [`IdentifierGenerator::random_unique`]: opaque record indices
//!
//! A returned identifier is free at generation time as observed by the
//! oracle; the check and the caller's eventual insert are not atomic, so
//! the caller still handles a unique-constraint violation by retrying.
//!
//! Everything is stateless over read-only configuration and safe to call
//! concurrently; only the oracle touches the outside world.
//!
//! # Examples
//! ```
//! use keygen::{IdentifierGenerator, UniquenessOracle};
//!
//! struct NoRecords;
//!
//! impl UniquenessOracle for NoRecords {
//!     fn exists(&self, _candidate: &str) -> bool {
//!         false
//!     }
//! }
//!
//! let generator = IdentifierGenerator::new();
//! let user_id = generator.derive_unique("alice", 12, &NoRecords).unwrap();
//! assert_eq!(user_id.len(), 12);
//! assert!(user_id.starts_with("alice"));
//!
//! let cart_index = generator.random_unique(8, &NoRecords).unwrap();
//! assert_eq!(cart_index.len(), 8);
//! ```

pub mod errors;
pub mod generator;
pub mod scramble;

// Re-export commonly used items
pub use errors::KeygenError;
pub use generator::IdentifierGenerator;
pub use generator::UniquenessOracle;
pub use scramble::scramble;
pub use scramble::scramble_range;
pub use scramble::ALPHANUMERIC;
