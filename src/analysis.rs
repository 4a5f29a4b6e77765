//! Validating a user's sequence and pattern, running the chosen search, and
//! presenting the outcome.
//!
//! ```
//! # use dnascan::prelude::*;
//! let analysis = analyze("acgtACGT", " acgt ", Algorithm::Kmp).unwrap();
//! assert_eq!(analysis.result.positions, vec![0, 4]);
//! assert_eq!(analysis.pattern_len, 4);
//!
//! assert_eq!(analyze("ACGT", "ACGU", Algorithm::Naive).unwrap_err(), AnalysisError::InvalidPattern);
//! ```

use crate::{
    data::{err::GetCode, is_valid_dna},
    search::{Algorithm, MatchResult},
};
use std::fmt::{self, Write};

/// A search request that was rejected before reaching a matcher.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnalysisError {
    MissingSequence,
    MissingPattern,
    InvalidSequence,
    InvalidPattern,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            AnalysisError::MissingSequence => "Please enter a DNA sequence or upload a file",
            AnalysisError::MissingPattern => "Please enter a pattern to search for",
            AnalysisError::InvalidSequence => "DNA sequence should only contain A, C, G, T characters",
            AnalysisError::InvalidPattern => "Pattern should only contain A, C, G, T characters",
        };

        f.write_str(message)
    }
}

impl std::error::Error for AnalysisError {}

impl GetCode for AnalysisError {}

/// The outcome of a validated search.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Analysis {
    pub algorithm:    Algorithm,
    pub result:       MatchResult,
    pub sequence_len: usize,
    pub pattern_len:  usize,
}

/// Trims and uppercases both inputs, checks that each is a non-empty `ACGT`
/// sequence, and then searches with `algorithm`.
///
/// ## Errors
///
/// Checks run in order: missing sequence, missing pattern, invalid sequence,
/// invalid pattern. The first failure is returned.
pub fn analyze(
    sequence: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>, algorithm: Algorithm,
) -> Result<Analysis, AnalysisError> {
    let sequence = sequence.as_ref().trim_ascii().to_ascii_uppercase();
    let pattern = pattern.as_ref().trim_ascii().to_ascii_uppercase();

    if sequence.is_empty() {
        return Err(AnalysisError::MissingSequence);
    } else if pattern.is_empty() {
        return Err(AnalysisError::MissingPattern);
    } else if !is_valid_dna(&sequence) {
        return Err(AnalysisError::InvalidSequence);
    } else if !is_valid_dna(&pattern) {
        return Err(AnalysisError::InvalidPattern);
    }

    Ok(Analysis {
        algorithm,
        result: algorithm.search(&sequence, &pattern),
        sequence_len: sequence.len(),
        pattern_len: pattern.len(),
    })
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = itoa::Buffer::new();

        writeln!(f, "Analysis Results [{name}]", name = self.algorithm.name())?;
        writeln!(f, "DNA Sequence Length: {} bp", buff.format(self.sequence_len))?;
        writeln!(f, "Pattern Length: {} bp", buff.format(self.pattern_len))?;
        writeln!(f, "Execution Time: {:.4} ms", self.result.elapsed_ms())?;

        let count = self.result.len();
        if count == 0 {
            return writeln!(f, "Pattern not found in the DNA sequence.");
        }

        f.write_str("Pattern found at ")?;
        f.write_str(buff.format(count))?;
        f.write_str(if count > 1 { " positions:\n" } else { " position:\n" })?;

        for (i, position) in self.result.positions.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_str(buff.format(*position))?;
        }
        f.write_char('\n')
    }
}
