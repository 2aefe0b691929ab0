//! Streaming FASTA parser
//!
//! # Format
//!
//! FASTA format consists of:
//! - Header line starting with '>' followed by an identifier and an optional
//!   free-text description
//! - Zero or more sequence lines (can be wrapped at any width)
//!
//! Example:
//! ```text
//! >sequence1 description
//! GATTACAGATTACA
//! TGCATGCA
//! >sequence2
//! ACGTACGT
//! ```
//!
//! # Architecture
//!
//! Iterator-based streaming: one record is materialized at a time, so the
//! whole file is never resident. `from_path` is restartable — each call opens
//! the file anew and replays records in file order.
//!
//! # Contract
//!
//! - An empty input (or one whose first non-blank line does not start with
//!   '>') is a format error.
//! - A header with no sequence lines yields a record with an empty sequence;
//!   that is valid input, not an error.
//! - Sequence bytes are preserved exactly as read; no case normalization.

use crate::error::{DogmaError, Result};
use crate::types::FastaRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// FASTA streaming parser
///
/// Yields `Result<FastaRecord>` in file order. Records may span multiple
/// wrapped sequence lines; surrounding whitespace is stripped from each line
/// before concatenation.
///
/// # Example
///
/// ```no_run
/// use seqdogma::FastaStream;
///
/// let stream = FastaStream::from_path("genome.fa")?;
/// for record in stream {
///     let record = record?;
///     println!("{}: {} bp", record.id, record.sequence.len());
/// }
/// # Ok::<(), seqdogma::DogmaError>(())
/// ```
pub struct FastaStream<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    finished: bool,
    /// True until the first header line has been seen
    at_start: bool,
    /// Peek buffer for look-ahead (to detect next record start)
    next_line: Option<String>,
}

impl FastaStream<BufReader<File>> {
    /// Create a FASTA stream from a local file path
    ///
    /// Each call opens the file from the beginning, so repeated calls replay
    /// the same records without the caller buffering them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use seqdogma::FastaStream;
    ///
    /// let stream = FastaStream::from_path("genome.fa")?;
    /// # Ok::<(), seqdogma::DogmaError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> FastaStream<R> {
    /// Create a FASTA stream from any buffered reader
    ///
    /// This is useful for testing or reading from in-memory sources.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(256),
            line_number: 0,
            finished: false,
            at_start: true,
            next_line: None,
        }
    }

    /// Read a single FASTA record
    fn read_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.finished {
            return Ok(None);
        }

        // Get header line (either from peek buffer or read new)
        let header = if let Some(peeked) = self.next_line.take() {
            peeked
        } else {
            loop {
                self.line_buffer.clear();
                match self.reader.read_line(&mut self.line_buffer) {
                    Ok(0) => {
                        self.finished = true;
                        if self.at_start {
                            // Nothing but blank lines (or nothing at all)
                            return Err(DogmaError::InvalidFastaFormat {
                                line: self.line_number,
                                msg: "Empty input: no FASTA records found".to_string(),
                            });
                        }
                        return Ok(None);
                    }
                    Ok(_) => {
                        self.line_number += 1;
                        let line = self.line_buffer.trim();
                        if line.is_empty() {
                            continue; // Skip blank lines between records
                        }
                        break line.to_string();
                    }
                    Err(e) => return Err(DogmaError::Io(e)),
                }
            }
        };

        // Validate header starts with '>'
        if !header.starts_with('>') {
            return Err(DogmaError::InvalidFastaFormat {
                line: self.line_number,
                msg: format!("Expected '>' at start of header, got: {}", header),
            });
        }
        self.at_start = false;

        // Split header into ID (up to first whitespace) and description (rest)
        let body = &header[1..];
        let (id, description) = match body.find(char::is_whitespace) {
            Some(pos) => (body[..pos].to_string(), body[pos..].trim_start().to_string()),
            None => (body.to_string(), String::new()),
        };

        // Read sequence lines until next header or EOF; an empty body is a
        // valid record with an empty sequence
        let mut sequence = Vec::new();

        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => {
                    self.finished = true;
                    break;
                }
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim();

                    if line.is_empty() {
                        continue; // Skip empty lines
                    }

                    if line.starts_with('>') {
                        // Start of next record - save for next iteration
                        self.next_line = Some(line.to_string());
                        break;
                    }

                    // Sequence line - append to current record
                    sequence.extend_from_slice(line.as_bytes());
                }
                Err(e) => return Err(DogmaError::Io(e)),
            }
        }

        Ok(Some(FastaRecord::new(id, description, sequence)))
    }
}

impl<R: BufRead> Iterator for FastaStream<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
