use super::FileContext;
use crate::{
    data::{ingest::strip_line_break, validation::is_valid_dna},
    unwrap_or_return_some_err,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};


/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    /// Uppercases the sequence and drops any ASCII whitespace, matching how
    /// sequences are prepared before searching.
    #[must_use]
    pub fn into_cleaned(mut self) -> Self {
        self.sequence.retain(|b| !b.is_ascii_whitespace());
        self.sequence.make_ascii_uppercase();
        self
    }

    /// Checks whether the sequence only contains `A`, `C`, `G`, and `T`.
    #[inline]
    #[must_use]
    pub fn is_valid_dna(&self) -> bool {
        is_valid_dna(&self.sequence)
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

/// Structure for buffered reading of `FASTA` files, one record at a time.
///
/// Records are yielded as [`std::io::Result<FastaSeq>`]. Sequence lines are
/// concatenated with line breaks removed and blank lines skipped. Whitespace
/// within a line is kept; use [`FastaSeq::into_cleaned`] before searching.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:      BufReader<R>,
    line:        Vec<u8>,
    next_header: Option<String>,
    started:     bool,
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader. Empty input results in an empty iterator.
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader:      BufReader::new(inner),
            line:        Vec::new(),
            next_header: None,
            started:     false,
        }
    }

    fn get_error(msg: &str, header: Option<&str>) -> std::io::Result<FastaSeq> {
        if let Some(header) = header {
            Err(IOError::new(ErrorKind::InvalidData, format!("{msg} See header: {header}")))
        } else {
            Err(IOError::new(ErrorKind::InvalidData, msg))
        }
    }

    /// Reads the next line into `self.line` without its line break. Returns
    /// `false` at the end of input.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        let len = strip_line_break(&self.line).len();
        self.line.truncate(len);
        Ok(true)
    }

    /// Skips leading blank lines and reads the first header.
    fn read_first_header(&mut self) -> Option<std::io::Result<String>> {
        self.started = true;

        loop {
            if !unwrap_or_return_some_err!(self.read_line()) {
                return None;
            }

            if let Some(header) = self.line.strip_prefix(b">") {
                return Some(Ok(String::from_utf8_lossy(header).into_owned()));
            } else if !self.line.iter().all(u8::is_ascii_whitespace) {
                return Some(Err(IOError::new(
                    ErrorKind::InvalidData,
                    "The FASTA file must start with a '>' symbol!",
                )));
            }
        }
    }
}

impl FastaReader<File> {
    /// Reads a FASTA file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if file or permissions do not exist, or if the file is
    /// empty. The file path is included in the error message.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        let file = Self::open_nonempty_file(filename)?;
        Ok(FastaReader::new(file))
    }
}

impl<R: std::io::Read> FileContext for FastaReader<R> {
    const FILE_KIND: &str = "FASTA";
}

impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = if self.started {
            self.next_header.take()?
        } else {
            unwrap_or_return_some_err!(self.read_first_header()?)
        };

        let mut sequence = Vec::new();
        while unwrap_or_return_some_err!(self.read_line()) {
            if let Some(header) = self.line.strip_prefix(b">") {
                self.next_header = Some(String::from_utf8_lossy(header).into_owned());
                break;
            } else if self.line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            sequence.extend_from_slice(&self.line);
        }

        // The record's lines are consumed first so the next record still parses
        if name.trim().is_empty() {
            return Some(Self::get_error("Missing FASTA header!", None));
        } else if sequence.is_empty() {
            return Some(Self::get_error("Missing FASTA sequence!", Some(&name)));
        }

        Some(Ok(FastaSeq { name, sequence }))
    }
}
