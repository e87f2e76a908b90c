//! tokmask masks blocklisted phrases in tokenized sentences and scores token
//! sequences with a weighted, position-dependent edit distance.
//!
//! Input is pre-tokenized: a sentence is an ordered sequence of tokens
//! (words, punctuation marks, newline markers), and a blocklist phrase may
//! span several of them. Masked tokens are replaced by runs of `#` of the
//! same length, and every masked occurrence is counted once. Both the masker
//! and the distance are pure and stateless; independent calls may run
//! concurrently without synchronization.

mod blocklist;
mod distance;
mod error;
mod mask;
mod rank;

pub use crate::blocklist::Blocklist;
pub use crate::distance::edit_distance;
pub use crate::error::Error;
pub use crate::mask::{Masked, Masker};
pub use crate::rank::Rating;

pub(crate) type Set<T> = rustc_hash::FxHashSet<T>;

/// MaskTokens makes it easy to sanitize a tokenized sentence with the bundled
/// blocklist by calling `.mask()`.
pub trait MaskTokens {
    /// The output is a newly allocated sentence with blocklisted spans
    /// replaced by runs of `#`.
    fn mask(&self) -> Vec<String>;

    /// Returns `true` if no bundled blocklist phrase occurs in the sentence.
    fn is_clean(&self) -> bool;
}

impl<S: AsRef<str>> MaskTokens for [S] {
    fn mask(&self) -> Vec<String> {
        Masker::default().mask_tokens(self).0
    }

    fn is_clean(&self) -> bool {
        Masker::default().mask_tokens(self).1 == 0
    }
}


use doc_comment::doctest;
doctest!("../README.md");
