use thiserror::Error;

/// Error type for identifier generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeygenError {
    /// Every candidate produced within the attempt budget already existed.
    ///
    /// Either the identifier space is close to full for this length or the
    /// oracle is misbehaving; both are capacity problems the caller cannot
    /// fix by retrying harder.
    #[error("No free identifier found after {attempts} attempts")]
    SpaceExhausted { attempts: usize },
}
