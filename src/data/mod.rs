//! ## Data import and validation functions.
//!
//! Sequences reach the matchers as plain byte slices. This module covers
//! everything before that point: reading `.txt` or `.fasta` input
//! ([`ingest`]), reading FASTA records one at a time ([`fasta`]), and checking
//! that a sequence only uses the bases `A`, `C`, `G`, and `T`
//! ([`is_valid_dna`]).
//!
//! ## IO Errors
//!
//! Reading functions return [`std::io::Error`]. Content problems are reported
//! with [`ErrorKind::InvalidData`] and unsupported file types with
//! [`ErrorKind::InvalidInput`]. When a file path is known it is added to the
//! message, and the original error stays accessible through
//! [`Error::source`]. Binaries can use [`unwrap_or_fail`] and
//! [`unwrap_or_die`] to report such errors and exit.
//!
//! ```
//! # use dnascan::data::ingest::{SequenceFormat, read_sequence};
//! let sequence = read_sequence(&b">chr1\nacgt\nTTGA\n"[..], SequenceFormat::Fasta).unwrap();
//! assert_eq!(sequence, b"ACGTTTGA");
//! ```
//!
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`ErrorKind::InvalidInput`]: std::io::ErrorKind::InvalidInput
//! [`Error::source`]: std::error::Error::source
//! [`unwrap_or_fail`]: crate::data::err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: crate::data::err::OrFail::unwrap_or_die

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// Loading sequences from raw text or FASTA content.
pub mod ingest;
/// A module for record types read from files.
pub mod records;

/// Helper alphabets.
mod alphas;
/// Used for alphabet validation
mod validation;

pub use records::fasta;
pub use validation::{CheckSequence, is_valid_dna};
