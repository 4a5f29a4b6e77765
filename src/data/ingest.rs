//! Loading a single sequence from raw text or FASTA content.
//!
//! Both formats are uppercased with all ASCII whitespace removed. FASTA
//! content additionally drops every header line (lines beginning with `>`),
//! concatenating the remaining lines into one sequence.

use super::{records::FileContext, validation::is_valid_dna};
use std::{
    ffi::OsStr,
    fmt,
    io::{ErrorKind, Read},
    path::Path,
    str::FromStr,
};

/// The supported sequence file formats.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SequenceFormat {
    /// Raw sequence text (`.txt`).
    Plain,
    /// One or more FASTA records (`.fasta`), concatenated.
    Fasta,
}

impl SequenceFormat {
    /// Chooses the format from a file extension, ignoring case.
    ///
    /// ## Errors
    ///
    /// Fails with [`ErrorKind::InvalidInput`] for anything other than `txt` or
    /// `fasta`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        path.as_ref()
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .parse()
    }

    /// Converts file content in this format into a cleaned sequence.
    #[must_use]
    pub fn parse(self, content: &[u8]) -> Vec<u8> {
        match self {
            SequenceFormat::Plain => clean_plain(content),
            SequenceFormat::Fasta => parse_fasta_content(content),
        }
    }
}

impl FromStr for SequenceFormat {
    type Err = std::io::Error;

    fn from_str(extension: &str) -> Result<Self, Self::Err> {
        if extension.eq_ignore_ascii_case("txt") {
            Ok(SequenceFormat::Plain)
        } else if extension.eq_ignore_ascii_case("fasta") {
            Ok(SequenceFormat::Fasta)
        } else {
            Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                "Invalid file format. Please upload a .txt or .fasta file",
            ))
        }
    }
}

impl fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceFormat::Plain => f.write_str("txt"),
            SequenceFormat::Fasta => f.write_str("fasta"),
        }
    }
}

/// Uppercases `content` and removes all ASCII whitespace.
#[must_use]
pub fn clean_plain(content: &[u8]) -> Vec<u8> {
    content
        .iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(u8::to_ascii_uppercase)
        .collect()
}

/// Drops FASTA header lines and returns the remaining lines concatenated,
/// uppercased, and without whitespace.
#[must_use]
pub fn parse_fasta_content(content: &[u8]) -> Vec<u8> {
    let mut sequence = Vec::with_capacity(content.len());
    for line in content.split(|b| *b == b'\n').filter(|line| !line.starts_with(b">")) {
        sequence.extend(
            line.iter()
                .filter(|b| !b.is_ascii_whitespace())
                .map(u8::to_ascii_uppercase),
        );
    }
    sequence
}

/// Removes a trailing `\n` or `\r\n` from `line`.
#[inline]
#[must_use]
pub(crate) fn strip_line_break(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Reads all of `reader` and parses it as `format`, validating that the result
/// is a non-empty `ACGT` sequence.
///
/// ## Errors
///
/// IO errors are propagated. Content that does not clean to a valid DNA
/// sequence is an [`ErrorKind::InvalidData`] error.
pub fn read_sequence<R: Read>(mut reader: R, format: SequenceFormat) -> std::io::Result<Vec<u8>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let sequence = format.parse(&content);
    if is_valid_dna(&sequence) {
        Ok(sequence)
    } else {
        Err(std::io::Error::new(
            ErrorKind::InvalidData,
            "Invalid DNA sequence. The file contains characters other than A, C, G, T.",
        ))
    }
}

struct SequenceFile;

impl FileContext for SequenceFile {
    const FILE_KIND: &str = "sequence file";
}

/// Loads a DNA sequence from a `.txt` or `.fasta` file.
///
/// ## Errors
///
/// Fails on an unsupported extension, on a missing or empty file, and when the
/// content is not a valid DNA sequence. Errors reading the file include its
/// path.
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u8>> {
    let path = path.as_ref();
    let format = SequenceFormat::from_path(path)?;
    let file = SequenceFile::open_nonempty_file(path)?;
    read_sequence(file, format).map_err(|err| SequenceFile::wrap_error("read error", path, err))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain() {
        assert_eq!(clean_plain(b" acgt\nAC GT\r\n"), b"ACGTACGT");
    }

    #[test]
    fn fasta() {
        let content = b">seq1 some description\nacgt\nAC GT\n>seq2\nTTTT\n";
        assert_eq!(parse_fasta_content(content), b"ACGTACGTTTTT");
        assert_eq!(parse_fasta_content(b">only header\n"), b"");
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SequenceFormat::from_path("a/b.txt").unwrap(), SequenceFormat::Plain);
        assert_eq!(SequenceFormat::from_path("b.FASTA").unwrap(), SequenceFormat::Fasta);
        assert_eq!(
            SequenceFormat::from_path("b.fa").unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert!(SequenceFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn read_validates() {
        assert_eq!(
            read_sequence(&b">s\nacgt\n"[..], SequenceFormat::Fasta).unwrap(),
            b"ACGT"
        );
        assert_eq!(
            read_sequence(&b"ACGN"[..], SequenceFormat::Plain).unwrap_err().kind(),
            ErrorKind::InvalidData
        );
        assert!(read_sequence(&b">s\n"[..], SequenceFormat::Fasta).is_err());
    }

    #[test]
    fn line_breaks() {
        assert_eq!(strip_line_break(b"ACGT\r\n"), b"ACGT");
        assert_eq!(strip_line_break(b"ACGT\n"), b"ACGT");
        assert_eq!(strip_line_break(b"ACGT"), b"ACGT");
    }
}
