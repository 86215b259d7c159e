#![no_main]

use arbitrary::Arbitrary;
use commonware_inclusion::{
    blob_min_square_size, checked_round_up_power_of_two, round_down_power_of_two,
    round_up_by_multiple_of,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    RoundUpPowerOfTwo { input: i64 },
    RoundDownPowerOfTwo { input: i64 },
    RoundUpByMultipleOf { cursor: usize, width: usize },
    BlobMinSquareSize { share_count: usize },
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::RoundUpPowerOfTwo { input } => {
            if let Some(p) = checked_round_up_power_of_two(input) {
                assert!(p > 0 && (p & (p - 1)) == 0);
                assert!(p >= input.max(1));
                assert!(p == 1 || p / 2 < input);
            } else {
                assert!(input > 1 << 62);
            }
        }

        FuzzInput::RoundDownPowerOfTwo { input } => match round_down_power_of_two(input) {
            Ok(p) => {
                assert!(input > 0);
                assert!(p > 0 && (p & (p - 1)) == 0);
                assert!(p <= input);
                assert!(p.checked_mul(2).map_or(true, |next| next > input));
            }
            Err(_) => assert!(input <= 0),
        },

        FuzzInput::RoundUpByMultipleOf { cursor, width } => {
            match round_up_by_multiple_of(cursor, width) {
                Ok(rounded) => {
                    assert_eq!(rounded % width, 0);
                    assert!(rounded >= cursor);
                    assert!(rounded - cursor < width);
                }
                Err(_) => assert!(width == 0 || cursor % width != 0),
            }
        }

        FuzzInput::BlobMinSquareSize { share_count } => {
            let side = blob_min_square_size(share_count) as u128;
            assert!(side.is_power_of_two());
            assert!(side * side >= share_count as u128);
            assert!(side == 1 || (side / 2) * (side / 2) < share_count as u128);
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
