//! ## Exact substring search
//!
//! Three interchangeable matchers report every starting index of a needle in
//! a haystack, including overlapping occurrences:
//!
//! | [`Algorithm`]            | Function                 | Time                      |
//! |--------------------------|--------------------------|---------------------------|
//! | [`Algorithm::Naive`]     | [`find_all_naive`]       | *O(nm)*                   |
//! | [`Algorithm::Kmp`]       | [`find_all_kmp`]         | *O(n + m)*                |
//! | [`Algorithm::RabinKarp`] | [`find_all_rabin_karp`]  | expected *O(n + m)*       |
//!
//! The `find_all_*` functions are pure and return only positions. The timed
//! variants [`brute_force_match`], [`automaton_match`], and
//! [`rolling_hash_match`] (or [`Algorithm::search`]) wrap the same search,
//! including any setup such as building the [`PrefixTable`], in a wall-clock
//! measurement and return a [`MatchResult`].
//!
//! An empty needle never matches. Neither does a needle longer than the
//! haystack.
//!
//! ```
//! # use dnascan::search::*;
//! let result = Algorithm::Kmp.search(b"AAAA", b"AA");
//! assert_eq!(result.positions, vec![0, 1, 2]);
//!
//! assert_eq!(b"ACGTACGT".find_all_matches(b"ACGT", Algorithm::RabinKarp), vec![0, 4]);
//! ```

use crate::data::err::GetCode;
use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

mod kmp;
mod naive;
mod prefix;
mod rabin_karp;


pub use kmp::find_all_kmp;
pub use naive::find_all_naive;
pub use prefix::PrefixTable;
pub use rabin_karp::{BASE, PRIME, find_all_rabin_karp};

/// The positions found by a search along with how long the search took.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct MatchResult {
    /// Ascending starting indices of every occurrence.
    pub positions: Vec<usize>,
    /// Wall-clock time spent searching, setup included.
    pub elapsed:   Duration,
}

impl MatchResult {
    /// The elapsed time in fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// The number of occurrences found.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Runs `search` and records how long it took.
#[inline]
fn timed(search: impl FnOnce() -> Vec<usize>) -> MatchResult {
    let start = Instant::now();
    let positions = search();
    MatchResult {
        positions,
        elapsed: start.elapsed(),
    }
}

/// Timed brute-force search. See [`find_all_naive`].
#[must_use]
pub fn brute_force_match<T: PartialEq>(haystack: &[T], needle: &[T]) -> MatchResult {
    timed(|| find_all_naive(haystack, needle))
}

/// Timed Knuth-Morris-Pratt search, including construction of the
/// [`PrefixTable`]. See [`find_all_kmp`].
#[must_use]
pub fn automaton_match<T: PartialEq>(haystack: &[T], needle: &[T]) -> MatchResult {
    timed(|| find_all_kmp(haystack, needle))
}

/// Timed Rabin-Karp search, including the initial hashes. See
/// [`find_all_rabin_karp`].
#[must_use]
pub fn rolling_hash_match<T>(haystack: &[T], needle: &[T]) -> MatchResult
where
    T: Copy + PartialEq + Into<u32>, {
    timed(|| find_all_rabin_karp(haystack, needle))
}

/// The available exact matching algorithms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Algorithm {
    /// Brute-force comparison at every offset.
    #[default]
    Naive,
    /// Knuth-Morris-Pratt, driven by a [`PrefixTable`].
    Kmp,
    /// Rabin-Karp with a rolling hash modulo [`PRIME`].
    RabinKarp,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Kmp, Algorithm::RabinKarp];

    /// The identifier accepted by [`FromStr`] and produced by [`Display`].
    ///
    /// [`Display`]: std::fmt::Display
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }

    /// A human-readable name for reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive Algorithm",
            Algorithm::Kmp => "Knuth-Morris-Pratt (KMP)",
            Algorithm::RabinKarp => "Rabin-Karp",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::Naive => {
                "Checks for a match at each position in the sequence by comparing each character of the pattern."
            }
            Algorithm::Kmp => {
                "Uses information about the pattern itself to avoid redundant comparisons when a mismatch occurs."
            }
            Algorithm::RabinKarp => {
                "Uses hashing to quickly compare the pattern with windows of the text, verifying each hash hit."
            }
        }
    }

    #[must_use]
    pub const fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::Naive => "O(n * m)",
            Algorithm::Kmp => "O(n + m)",
            Algorithm::RabinKarp => "Average O(n + m), worst case O(n * m)",
        }
    }

    #[must_use]
    pub const fn best_for(self) -> &'static str {
        match self {
            Algorithm::Naive => "Short patterns and sequences or when the pattern rarely matches.",
            Algorithm::Kmp => "Long patterns with repeating subpatterns.",
            Algorithm::RabinKarp => "Long sequences where most windows can be rejected by hash alone.",
        }
    }

    /// Finds all positions of `needle` in `haystack` without timing.
    #[must_use]
    pub fn find_all<T>(self, haystack: &[T], needle: &[T]) -> Vec<usize>
    where
        T: Copy + PartialEq + Into<u32>, {
        match self {
            Algorithm::Naive => find_all_naive(haystack, needle),
            Algorithm::Kmp => find_all_kmp(haystack, needle),
            Algorithm::RabinKarp => find_all_rabin_karp(haystack, needle),
        }
    }

    /// Finds all positions of `needle` in `haystack` and measures the time
    /// taken.
    #[must_use]
    pub fn search<T>(self, haystack: &[T], needle: &[T]) -> MatchResult
    where
        T: Copy + PartialEq + Into<u32>, {
        match self {
            Algorithm::Naive => brute_force_match(haystack, needle),
            Algorithm::Kmp => automaton_match(haystack, needle),
            Algorithm::RabinKarp => rolling_hash_match(haystack, needle),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AlgorithmParseError(s.to_string()))
    }
}

/// An unrecognized algorithm identifier.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AlgorithmParseError(pub String);

impl fmt::Display for AlgorithmParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown algorithm '{name}'. Expected one of: naive, kmp, rabin-karp",
            name = self.0
        )
    }
}

impl std::error::Error for AlgorithmParseError {}

impl GetCode for AlgorithmParseError {
    fn get_code(&self) -> i32 {
        2
    }
}

/// Trait for finding every occurrence of a byte substring with a chosen
/// [`Algorithm`].
pub trait ByteMatches {
    /// Returns the ascending starting indices of all, possibly overlapping,
    /// occurrences of `needle`.
    fn find_all_matches(&self, needle: impl AsRef<[u8]>, algorithm: Algorithm) -> Vec<usize>;

    /// Like [`find_all_matches`](ByteMatches::find_all_matches) but also
    /// measures the search.
    fn search_matches(&self, needle: impl AsRef<[u8]>, algorithm: Algorithm) -> MatchResult;
}

impl<T: AsRef<[u8]> + ?Sized> ByteMatches for T {
    #[inline]
    fn find_all_matches(&self, needle: impl AsRef<[u8]>, algorithm: Algorithm) -> Vec<usize> {
        algorithm.find_all(self.as_ref(), needle.as_ref())
    }

    #[inline]
    fn search_matches(&self, needle: impl AsRef<[u8]>, algorithm: Algorithm) -> MatchResult {
        algorithm.search(self.as_ref(), needle.as_ref())
    }
}
