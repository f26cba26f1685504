use rand::Rng;
use rand::seq::SliceRandom;

/// Unbiased in-place shuffle: every permutation is equally likely.
///
/// `SliceRandom::shuffle` is a Fisher–Yates walk from the last slot down, so a seeded
/// `rng` reproduces the same order.
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle_in_place(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle_in_place(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec!['a'];
        shuffle_in_place(&mut single, &mut rng);
        assert_eq!(single, vec!['a']);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle_in_place(&mut a, &mut StdRng::seed_from_u64(42));
        shuffle_in_place(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_ordering_of_three_shows_up() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..6_000 {
            let mut items = vec![1_u8, 2, 3];
            shuffle_in_place(&mut items, &mut rng);
            *seen.entry(items).or_default() += 1;
        }

        assert_eq!(seen.len(), 6);
        // Expected ~1000 each; a biased swap scheme drifts well outside this band.
        assert!(seen.values().all(|count| (800..=1200).contains(count)));
    }
}
