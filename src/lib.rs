#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Validating and reporting a single search request.
pub mod analysis;
/// Data import and validation functions.
pub mod data;
/// Exact substring search.
pub mod search;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::analysis::{Analysis, AnalysisError, analyze};
    pub use crate::data::{
        CheckSequence,
        err::{GetCode, OrFail},
        fasta::{FastaReader, FastaSeq},
        ingest::{SequenceFormat, read_sequence_file},
        is_valid_dna,
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
    pub use crate::search::{
        Algorithm, ByteMatches, MatchResult, PrefixTable, automaton_match, brute_force_match, rolling_hash_match,
    };
}
