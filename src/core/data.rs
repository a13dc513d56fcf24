//! Memory-efficient CSV loader with zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Public Row Structs ---

/// One (x, y) data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
}

impl Entry {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount(usize),
    BadFloat { field: &'static str, text: String },
    Empty,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected 1–2 columns, got {}", self.line, n)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::Empty => write!(f, "no data rows found"),
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 (the typographic minus some spreadsheets emit) to `-`.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                field,
                text: "NaN".into(),
            },
        })
    }
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read `x,y` rows. A single-column file is treated as y values with the
/// row index as x. Blank lines and `#` comments are skipped; a non-numeric
/// first row is treated as a header.
pub fn read_csv_fast<R: Read>(src: R) -> Result<Vec<Entry>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<Entry>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            let first = buf.iter().position(|&b| b == b',').unwrap_or(buf.len());
            if lexical_core::parse::<f64>(trim(&buf[..first])).is_err() {
                continue;
            }
        }

        // split – max 2 cols
        let mut cols = [None::<&[u8]>; 2];
        let mut idx = 0;
        let mut start = 0;
        loop {
            let end = buf[start..]
                .iter()
                .position(|&b| b == b',')
                .map_or(buf.len(), |p| start + p);
            if idx < 2 {
                cols[idx] = Some(trim(&buf[start..end]));
                idx += 1;
            } else {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount(idx + 1),
                });
            }
            if end == buf.len() {
                break;
            }
            start = end + 1;
        }

        let entry = match cols {
            [Some(y), None] => Entry::new(data.len() as f64, parse_f64(y, line_no, "y")?),
            [Some(x), Some(y)] => Entry::new(
                parse_f64(x, line_no, "x")?,
                parse_f64(y, line_no, "y")?,
            ),
            _ => {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount(idx),
                });
            }
        };
        data.push(entry);
    }
    if data.is_empty() {
        return Err(ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(data)
}

pub fn read_csv_from_path(path: &str) -> Result<Vec<Entry>, ParseCsvError> {
    if path == "-" {
        read_csv_fast(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv_fast(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_column_rows() {
        let data = read_csv_fast(&b"0,1\n1.5,2.5\n"[..]).unwrap();
        assert_eq!(data, vec![Entry::new(0.0, 1.0), Entry::new(1.5, 2.5)]);
    }

    #[test]
    fn header_comments_and_blanks_are_skipped() {
        let data = read_csv_fast(&b"x,y\n# generated\n\n3,4\n"[..]).unwrap();
        assert_eq!(data, vec![Entry::new(3.0, 4.0)]);
    }

    #[test]
    fn single_column_uses_row_index_as_x() {
        let data = read_csv_fast(&b"5\n7\n9\n"[..]).unwrap();
        assert_eq!(
            data,
            vec![
                Entry::new(0.0, 5.0),
                Entry::new(1.0, 7.0),
                Entry::new(2.0, 9.0)
            ]
        );
    }

    #[test]
    fn unicode_minus_is_normalized() {
        let data = read_csv_fast("−2,−3\n".as_bytes()).unwrap();
        assert_eq!(data, vec![Entry::new(-2.0, -3.0)]);
    }

    #[test]
    fn bad_float_reports_line_and_field() {
        let err = read_csv_fast(&b"0,1\n2,oops\n"[..]).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFloat { field: "y", .. }
        ));
    }

    #[test]
    fn too_many_columns_is_rejected() {
        let err = read_csv_fast(&b"1,2,3\n"[..]).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(3)));
    }

    #[test]
    fn empty_input_is_reported() {
        let err = read_csv_fast(&b"# nothing\n"[..]).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Empty));
    }
}
