//! Place blobs in a data square so their commitments can be proven from aligned subtrees.
//!
//! A block's data is laid out in a square of shares whose side is always a power of two. Each blob
//! occupies a contiguous run of shares, and its commitment is a merkle mountain range over subtree
//! roots of that run. For a proof to only need a handful of those subtree roots, every blob must
//! start at a share index aligned to the width of its largest subtree.
//!
//! This crate computes those starting indices. Every node must derive identical indices from
//! identical inputs, so all rounding is performed with exact integer arithmetic.
//!
//! # Example
//!
//! ```
//! use commonware_inclusion::{blob_shares_used_non_interactive_defaults, Config};
//!
//! let threshold = Config::default().subtree_root_threshold;
//! let layout = blob_shares_used_non_interactive_defaults(1, threshold, &[128, 128, 128]).unwrap();
//! assert_eq!(layout.shares_used, 385);
//! assert_eq!(layout.indexes, vec![2, 130, 258]);
//! ```
//!
//! # Status
//!
//! `commonware-inclusion` is **ALPHA** software and is not yet recommended for production use.
//! Developers should expect breaking changes and occasional instability.

#![doc(
    html_logo_url = "https://commonware.xyz/imgs/rustdoc_logo.svg",
    html_favicon_url = "https://commonware.xyz/favicon.ico"
)]

use std::num::NonZeroUsize;
use thiserror::Error;

pub mod math;
pub use math::{
    checked_round_up_power_of_two, round_down_power_of_two, round_up_by_multiple_of,
    round_up_power_of_two,
};
pub mod square;
pub use square::{blob_min_square_size, subtree_width};
mod layout;
pub use layout::{blob_shares_used_non_interactive_defaults, next_share_index, Layout};

/// The subtree root threshold used by the default [Config].
///
/// Bounds the number of subtree roots in any blob's commitment.
pub const DEFAULT_SUBTREE_ROOT_THRESHOLD: usize = 64;

const DEFAULT_THRESHOLD: NonZeroUsize = match NonZeroUsize::new(DEFAULT_SUBTREE_ROOT_THRESHOLD) {
    Some(threshold) => threshold,
    None => panic!("default threshold must be non-zero"),
};

/// Errors that can occur when computing a blob layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("divisor cannot be 0")]
    InvalidDivisor,
    #[error("input {0} must be positive")]
    InvalidInput(String),
    #[error("share index overflows usize")]
    Overflow,
    #[error("share index {0} overflows u32")]
    IndexOverflow(usize),
    #[error("failed to round up cursor {cursor} by multiple of {width}: {source}")]
    Alignment {
        cursor: usize,
        width: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("failed to calculate next share index for blob {blob}: {source}")]
    Placement {
        blob: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns the error that caused this one, unwrapping any context added along the way.
    pub fn root(&self) -> &Error {
        match self {
            Error::Alignment { source, .. } | Error::Placement { source, .. } => source.root(),
            err => err,
        }
    }
}

/// Protocol parameters that every participant must agree on to derive the same layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Upper bound on the number of subtree roots in a blob's commitment.
    ///
    /// Larger blobs use proportionally wider subtrees to stay under this bound.
    pub subtree_root_threshold: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subtree_root_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    /// Returns the width of the largest subtree in the commitment over a blob of `share_count`
    /// shares.
    pub fn subtree_width(&self, share_count: usize) -> usize {
        subtree_width(share_count, self.subtree_root_threshold)
    }

    /// Returns the first share index at or after `cursor` where a blob of `blob_share_len` shares
    /// may start.
    pub fn next_share_index(&self, cursor: usize, blob_share_len: usize) -> Result<usize, Error> {
        next_share_index(cursor, blob_share_len, self.subtree_root_threshold)
    }

    /// Places each blob in `blob_share_lens` (in order) starting at `cursor`.
    pub fn plan(&self, cursor: usize, blob_share_lens: &[usize]) -> Result<Layout, Error> {
        blob_shares_used_non_interactive_defaults(
            cursor,
            self.subtree_root_threshold,
            blob_share_lens,
        )
    }
}
