use rand::seq::SliceRandom;
use rand::Rng;

/// Identifier alphabet: lowercase letters, uppercase letters, digits.
pub const ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produce a random string of exactly `length` characters from `alphabet`.
///
/// # Panics
/// Panics if `alphabet` is empty.
pub fn scramble(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::thread_rng();
    scramble_with(&mut rng, alphabet, length, length)
}

/// Produce a random string whose length is drawn uniformly from
/// `[min_length, max_length]`.
///
/// # Panics
/// Panics if `alphabet` is empty or `min_length > max_length`.
pub fn scramble_range(alphabet: &[u8], min_length: usize, max_length: usize) -> String {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(min_length..=max_length);
    scramble_with(&mut rng, alphabet, length, max_length)
}

/// Partition/shuffle/select randomization.
///
/// Builds a working pool of the alphabet repeated `reps` times (`reps`
/// drawn from `[rep_base, 2 * rep_base]`), shuffles the pool `reps` times,
/// partitions it into `length` contiguous nearly equal-sized chunks, and
/// selects one character per chunk: a draw of `length` candidates with
/// replacement, then one of the drawn candidates at a random index.
///
/// The shuffle repetition count affects nothing but runtime; callers may
/// only rely on the output being `length` characters uniformly drawn from
/// `alphabet`.
fn scramble_with<R: Rng>(rng: &mut R, alphabet: &[u8], length: usize, rep_base: usize) -> String {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");

    if length == 0 {
        return String::new();
    }

    let reps = rng.gen_range(rep_base..=rep_base * 2);
    let mut pool = alphabet.repeat(reps);
    for _ in 0..reps {
        pool.shuffle(rng);
    }

    // reps >= length guarantees at least `length` pool entries, so every
    // chunk below is non-empty.
    let base_size = pool.len() / length;
    let remainder = pool.len() % length;

    let mut result = String::with_capacity(length);
    let mut start = 0;
    for index in 0..length {
        let size = base_size + usize::from(index < remainder);
        let chunk = &pool[start..start + size];
        start += size;

        let draw: Vec<u8> = (0..length)
            .map(|_| chunk[rng.gen_range(0..chunk.len())])
            .collect();
        result.push(draw[rng.gen_range(0..length)] as char);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_length_is_exact() {
        for _ in 0..50 {
            assert_eq!(scramble(ALPHANUMERIC, 8).len(), 8);
        }
        assert_eq!(scramble(ALPHANUMERIC, 1).len(), 1);
        assert_eq!(scramble(ALPHANUMERIC, 0).len(), 0);
    }

    #[test]
    fn test_scramble_draws_from_alphabet() {
        for _ in 0..50 {
            let key = scramble(ALPHANUMERIC, 12);
            assert!(key.bytes().all(|b| ALPHANUMERIC.contains(&b)));
        }
    }

    #[test]
    fn test_scramble_tiny_alphabet() {
        for _ in 0..50 {
            let key = scramble(b"ab", 8);
            assert_eq!(key.len(), 8);
            assert!(key.bytes().all(|b| b == b'a' || b == b'b'));
        }
    }

    #[test]
    fn test_scramble_range_respects_bounds() {
        for _ in 0..50 {
            let key = scramble_range(ALPHANUMERIC, 8, 12);
            assert!((8..=12).contains(&key.len()));
            assert!(key.bytes().all(|b| ALPHANUMERIC.contains(&b)));
        }
    }

    #[test]
    fn test_scramble_range_fixed_bounds() {
        assert_eq!(scramble_range(ALPHANUMERIC, 9, 9).len(), 9);
    }

    #[test]
    #[should_panic(expected = "alphabet must not be empty")]
    fn test_scramble_empty_alphabet_panics() {
        scramble(b"", 8);
    }
}
