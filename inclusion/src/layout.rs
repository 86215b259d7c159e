//! Assign starting share indices to a sequence of blobs.
//!
//! Each blob is placed at the first index at or after the cursor that is a multiple of its
//! subtree width. The cursor then moves past the blob, so any gap left by alignment is filled by
//! padding downstream.

use crate::{math::round_up_by_multiple_of, square::subtree_width, Error};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// The placement of an ordered sequence of blobs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Shares spanned from the starting cursor to the end of the last blob, including any padding
    /// inserted for alignment.
    pub shares_used: usize,
    /// Starting share index of each blob, in input order.
    pub indexes: Vec<u32>,
}

/// Returns the next index in the square at which a blob of `blob_share_len` shares can start.
///
/// `cursor` is the index after the end of the previous blob. The returned index is the smallest
/// multiple of the blob's [subtree_width] that is at least `cursor`.
pub fn next_share_index(
    cursor: usize,
    blob_share_len: usize,
    subtree_root_threshold: NonZeroUsize,
) -> Result<usize, Error> {
    let width = subtree_width(blob_share_len, subtree_root_threshold);
    round_up_by_multiple_of(cursor, width).map_err(|err| Error::Alignment {
        cursor,
        width,
        source: Box::new(err),
    })
}

/// Places each blob in `blob_share_lens` (in order) starting at `cursor`, following the blob share
/// commitment rules.
///
/// If any blob cannot be placed, no partial layout is returned. Indexes are `u32`, so a blob that
/// would start at share `2^32` or beyond fails with [Error::IndexOverflow] rather than being
/// truncated.
pub fn blob_shares_used_non_interactive_defaults(
    cursor: usize,
    subtree_root_threshold: NonZeroUsize,
    blob_share_lens: &[usize],
) -> Result<Layout, Error> {
    let start = cursor;
    let mut cursor = cursor;
    let mut indexes = Vec::with_capacity(blob_share_lens.len());
    for (blob, &blob_len) in blob_share_lens.iter().enumerate() {
        let index = next_share_index(cursor, blob_len, subtree_root_threshold).map_err(|err| {
            debug!(blob, cursor, blob_len, ?err, "failed to place blob");
            Error::Placement {
                blob,
                source: Box::new(err),
            }
        })?;
        let width = subtree_width(blob_len, subtree_root_threshold);
        trace!(blob, cursor, index, width, blob_len, "placed blob");
        indexes.push(u32::try_from(index).map_err(|_| Error::IndexOverflow(index))?);
        cursor = index.checked_add(blob_len).ok_or(Error::Overflow)?;
    }
    Ok(Layout {
        shares_used: cursor - start,
        indexes,
    })
}
