use commonware_inclusion::{
    blob_min_square_size, blob_shares_used_non_interactive_defaults, next_share_index,
    round_down_power_of_two, round_up_by_multiple_of, round_up_power_of_two, subtree_width, Config,
    Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::num::NonZeroUsize;

const ITERATIONS: usize = 10_000;

fn random_threshold(rng: &mut StdRng) -> NonZeroUsize {
    NonZeroUsize::new(rng.gen_range(1..=256)).unwrap()
}

#[test]
fn round_up_power_of_two_is_smallest_power_above() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..ITERATIONS {
        let x: i64 = rng.gen_range(-1_000..=1 << 40);
        let p = round_up_power_of_two(x);
        assert!(p > 0 && (p & (p - 1)) == 0, "{p} is not a power of two");
        assert!(p >= x.max(1));
        assert!(
            p == 1 || p / 2 < x,
            "{p} is not the smallest power above {x}"
        );
    }
}

#[test]
fn round_down_power_of_two_is_largest_power_below() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ITERATIONS {
        let x: u64 = rng.gen_range(1..=u64::MAX);
        let p = round_down_power_of_two(x).unwrap();
        assert!(p.is_power_of_two());
        assert!(p <= x);
        assert!(p.checked_mul(2).map_or(true, |next| next > x));
    }
    for x in [0i64, -1, -64, i64::MIN] {
        assert!(matches!(
            round_down_power_of_two(x),
            Err(Error::InvalidInput(_))
        ));
    }
}

#[test]
fn round_up_by_multiple_of_is_aligned_and_near() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ITERATIONS {
        let cursor = rng.gen_range(0..1 << 32);
        let width = rng.gen_range(1..=1 << 16);
        let rounded = round_up_by_multiple_of(cursor, width).unwrap();
        assert_eq!(rounded % width, 0);
        assert!(rounded >= cursor && rounded < cursor + width);
    }
    assert_eq!(round_up_by_multiple_of(10, 0), Err(Error::InvalidDivisor));
}

#[test]
fn blob_min_square_size_is_minimal() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ITERATIONS {
        let share_count = rng.gen_range(0..1 << 24);
        let side = blob_min_square_size(share_count);
        assert!(side.is_power_of_two());
        assert!(side * side >= share_count);
        assert!(side == 1 || (side / 2) * (side / 2) < share_count);
    }
}

#[test]
fn subtree_width_never_exceeds_square() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ITERATIONS {
        let threshold = random_threshold(&mut rng);
        let share_count = rng.gen_range(0..1 << 24);
        let width = subtree_width(share_count, threshold);
        assert!(width.is_power_of_two());
        assert!(width <= blob_min_square_size(share_count));
    }
}

#[test]
fn next_share_index_is_aligned_to_subtree_width() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ITERATIONS {
        let threshold = random_threshold(&mut rng);
        let cursor = rng.gen_range(0..1 << 20);
        let blob_len = rng.gen_range(0..1 << 16);
        let width = subtree_width(blob_len, threshold);
        let index = next_share_index(cursor, blob_len, threshold).unwrap();
        assert_eq!(index % width, 0);
        assert!(index >= cursor && index < cursor + width);
    }
}

#[test]
fn layout_is_ordered_and_non_overlapping() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..1_000 {
        let threshold = random_threshold(&mut rng);
        let cursor = rng.gen_range(0..1 << 12);
        let count = rng.gen_range(0..32);
        let blob_lens: Vec<usize> = (0..count).map(|_| rng.gen_range(0..1 << 12)).collect();

        let layout =
            blob_shares_used_non_interactive_defaults(cursor, threshold, &blob_lens).unwrap();
        assert_eq!(layout.indexes.len(), blob_lens.len());

        let mut end = cursor;
        for (&index, &len) in layout.indexes.iter().zip(&blob_lens) {
            let index = index as usize;
            assert!(index >= end);
            assert_eq!(index % subtree_width(len, threshold), 0);
            end = index + len;
        }
        assert_eq!(layout.shares_used, end - cursor);
    }
}

#[test]
fn layout_matches_repeated_next_share_index() {
    let config = Config::default();
    let blob_lens = [1, 65, 129, 8193, 3, 4096, 0, 16256];
    let layout = config.plan(5, &blob_lens).unwrap();

    let mut cursor = 5;
    for (i, &len) in blob_lens.iter().enumerate() {
        let index = config.next_share_index(cursor, len).unwrap();
        assert_eq!(layout.indexes[i] as usize, index);
        cursor = index + len;
    }
    assert_eq!(layout.shares_used, cursor - 5);
}
