//! Strict quote check run over a CSV file before its rows are decoded.
//!
//! The `csv` reader accepts stray quotes and unterminated quoted fields, which
//! merges or truncates rows without notice. A file that breaks RFC 4180
//! quoting is rejected as a whole.

use thiserror::Error;

const QUOTE: u8 = b'"';
const DELIMITER: u8 = b',';

/// First quoting violation found in a file. Lines are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("line {line}: quoted field is never closed")]
    Unterminated { line: usize },

    #[error("line {line}: bare \" in unquoted field")]
    BareQuote { line: usize },

    #[error("line {line}: unexpected text after closing quote")]
    TextAfterQuote { line: usize },
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted { opened_on: usize },
    // just read a `"` inside a quoted field: either an escape or the close
    ClosingQuote { opened_on: usize },
}

/// Scans raw file bytes and rejects:
/// - a quoted field with no closing quote before end of input
/// - a `"` anywhere inside a field that did not open with one
/// - anything but `""`, a delimiter or a line end right after a closing quote
pub fn check_quoting(data: &[u8]) -> Result<(), QuoteError> {
    let mut state = State::FieldStart;
    let mut line = 1;

    for (i, &byte) in data.iter().enumerate() {
        state = match state {
            State::FieldStart | State::Unquoted => match byte {
                QUOTE if matches!(state, State::FieldStart) => State::Quoted { opened_on: line },
                QUOTE => return Err(QuoteError::BareQuote { line }),
                DELIMITER | b'\n' => State::FieldStart,
                _ => State::Unquoted,
            },
            State::Quoted { opened_on } => match byte {
                QUOTE => State::ClosingQuote { opened_on },
                _ => State::Quoted { opened_on },
            },
            State::ClosingQuote { opened_on } => match byte {
                QUOTE => State::Quoted { opened_on },
                DELIMITER | b'\n' => State::FieldStart,
                // CRLF line end
                b'\r' if matches!(data.get(i + 1), None | Some(&b'\n')) => {
                    State::ClosingQuote { opened_on }
                }
                _ => return Err(QuoteError::TextAfterQuote { line }),
            },
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    match state {
        State::Quoted { opened_on } => Err(QuoteError::Unterminated { line: opened_on }),
        _ => Ok(()),
    }
}
