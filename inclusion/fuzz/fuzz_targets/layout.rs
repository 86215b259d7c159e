#![no_main]

use arbitrary::Arbitrary;
use commonware_inclusion::{
    blob_shares_used_non_interactive_defaults, next_share_index, subtree_width, Error,
};
use libfuzzer_sys::fuzz_target;
use std::num::NonZeroUsize;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    cursor: usize,
    threshold: NonZeroUsize,
    blob_lens: Vec<u32>,
}

fn fuzz(input: FuzzInput) {
    let blob_lens: Vec<usize> = input.blob_lens.iter().map(|&len| len as usize).collect();
    let result =
        blob_shares_used_non_interactive_defaults(input.cursor, input.threshold, &blob_lens);
    let layout = match result {
        Ok(layout) => layout,
        Err(err) => {
            // Only arithmetic limits can stop a placement.
            assert!(matches!(
                err.root(),
                Error::Overflow | Error::IndexOverflow(_)
            ));
            return;
        }
    };

    assert_eq!(layout.indexes.len(), blob_lens.len());
    let mut cursor = input.cursor;
    for (&index, &len) in layout.indexes.iter().zip(&blob_lens) {
        let index = index as usize;
        let expected = next_share_index(cursor, len, input.threshold).unwrap();
        assert_eq!(index, expected);
        assert!(index >= cursor);
        assert_eq!(index % subtree_width(len, input.threshold), 0);
        cursor = index + len;
    }
    assert_eq!(layout.shares_used, cursor - input.cursor);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
