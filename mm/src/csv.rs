//! Line-oriented CSV reader
//!
//! Plain comma splitting: no quoting, no escaping, no header row. Blank lines
//! are dropped silently and every other line comes out either as a
//! [`Record`] or as [`Line::Malformed`] when it does not have exactly
//! [`FIELD_COUNT`] fields.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Number of fields a row must have to be processed
pub const FIELD_COUNT: usize = 5;

/// One well-formed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the input
    pub line: usize,
    pub id: String,
    pub company: String,
    pub city: String,
    pub email: String,
    pub username: String,
}

/// A non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Record(Record),
    Malformed { line: usize, field_count: usize },
}

/// Split a line on commas, dropping trailing empty fields.
///
/// `"1,a,b,c,"` gives four fields, `""` gives none.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse a single line. Returns `None` for blank lines.
pub fn parse_line(line_no: usize, raw: &str) -> Option<Line> {
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    if raw.trim().is_empty() {
        return None;
    }

    let fields = split_fields(raw);
    let parsed = match fields.as_slice() {
        [id, company, city, email, username] => Line::Record(Record {
            line: line_no,
            id: id.to_string(),
            company: company.to_string(),
            city: city.to_string(),
            email: email.to_string(),
            username: username.to_string(),
        }),
        other => Line::Malformed {
            line: line_no,
            field_count: other.len(),
        },
    };
    Some(parsed)
}

/// Streaming reader over CSV lines
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid UTF-8
/// are replaced with U+FFFD instead of failing the stream.
pub struct CsvReader<R> {
    reader: R,
    pending: VecDeque<String>,
    buf: Vec<u8>,
    line_no: usize,
}

impl CsvReader<BufReader<File>> {
    /// Open a CSV file for streaming
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// Line number of the last line pulled from the stream
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Read up to the next `\n` and queue every line it contains.
    /// Returns `false` at end of stream.
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        let mut chunk: &[u8] = &self.buf;
        chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
        chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
        for piece in chunk.split(|b| *b == b'\r') {
            self.pending.push_back(String::from_utf8_lossy(piece).into_owned());
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.pending.pop_front() {
                Some(raw) => raw,
                None => match self.fill() {
                    Ok(true) => continue,
                    Ok(false) => return None,
                    Err(e) => return Some(Err(e)),
                },
            };
            self.line_no += 1;
            if let Some(line) = parse_line(self.line_no, &raw) {
                return Some(Ok(line));
            }
        }
    }
}
