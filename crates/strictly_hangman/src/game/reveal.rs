//! Pre-reveal of letters at the start of a round.

use rand::Rng;
use tracing::{debug, instrument};

/// Upper bound on random draws while pre-revealing.
const MAX_REVEAL_ATTEMPTS: usize = 1000;

/// Number of letters revealed before the first guess, by word length.
///
/// Up to 4 characters: 1. 5 or 6: 2. 7 and longer: 3.
pub fn reveal_count(length: usize) -> usize {
    match length {
        0..=4 => 1,
        5..=6 => 2,
        _ => 3,
    }
}

/// Reveals up to `count` hidden alphabetic positions chosen at random.
///
/// Uses rejection sampling over all positions, stopping after
/// [`MAX_REVEAL_ATTEMPTS`] draws or as soon as no hidden alphabetic
/// position remains. Returns the positions revealed, in draw order.
#[instrument(skip(secret, mask, rng), fields(length = secret.len()))]
pub(super) fn pre_reveal<R: Rng + ?Sized>(
    secret: &[char],
    mask: &mut [bool],
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut hidden = secret
        .iter()
        .zip(mask.iter())
        .filter(|(c, revealed)| c.is_ascii_alphabetic() && !**revealed)
        .count();
    let mut revealed = Vec::with_capacity(count);
    let mut attempts = 0;

    while revealed.len() < count && hidden > 0 && attempts < MAX_REVEAL_ATTEMPTS {
        let pos = rng.random_range(0..secret.len());
        if !mask[pos] && secret[pos].is_ascii_alphabetic() {
            mask[pos] = true;
            revealed.push(pos);
            hidden -= 1;
        }
        attempts += 1;
    }

    debug!(requested = count, revealed = revealed.len(), attempts, "Pre-reveal finished");
    revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reveal_count_tiers() {
        assert_eq!(reveal_count(0), 1);
        assert_eq!(reveal_count(3), 1);
        assert_eq!(reveal_count(4), 1);
        assert_eq!(reveal_count(5), 2);
        assert_eq!(reveal_count(6), 2);
        assert_eq!(reveal_count(7), 3);
        assert_eq!(reveal_count(10), 3);
        assert_eq!(reveal_count(40), 3);
    }

    #[test]
    fn test_pre_reveal_only_touches_hidden_letters() {
        let secret: Vec<char> = "a-b c".chars().collect();
        let mut mask = vec![false, true, false, true, false];
        let mut rng = StdRng::seed_from_u64(3);

        let revealed = pre_reveal(&secret, &mut mask, 2, &mut rng);

        assert_eq!(revealed.len(), 2);
        for pos in revealed {
            assert!(secret[pos].is_ascii_alphabetic());
            assert!(mask[pos]);
        }
    }

    #[test]
    fn test_pre_reveal_stops_when_nothing_hidden() {
        let secret: Vec<char> = "ab".chars().collect();
        let mut mask = vec![false, false];
        let mut rng = StdRng::seed_from_u64(9);

        let revealed = pre_reveal(&secret, &mut mask, 3, &mut rng);

        assert_eq!(revealed.len(), 2);
        assert_eq!(mask, vec![true, true]);
    }

    /// Always draws position 0.
    struct StuckRng;

    impl rand::RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn test_pre_reveal_gives_up_after_attempt_bound() {
        let secret: Vec<char> = "-ab".chars().collect();
        let mut mask = vec![true, false, false];

        let revealed = pre_reveal(&secret, &mut mask, 2, &mut StuckRng);

        assert!(revealed.is_empty());
        assert_eq!(mask, vec![true, false, false]);
    }

    #[test]
    fn test_pre_reveal_empty_word() {
        let mut mask: Vec<bool> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pre_reveal(&[], &mut mask, 1, &mut rng).is_empty());
    }

    #[test]
    fn test_pre_reveal_without_letters() {
        let secret: Vec<char> = "1-2".chars().collect();
        let mut mask = vec![true, true, true];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pre_reveal(&secret, &mut mask, 1, &mut rng).is_empty());
    }
}
