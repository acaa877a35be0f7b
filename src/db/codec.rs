//! Row codec for the diary's flat files.
//!
//! A line is a comma-separated list of fields. At most one field per line may
//! be wrapped in double quotes, and only that field may contain literal commas
//! (the food name). Writers terminate every line with two empty padding fields
//! and CRLF; the decoder removes that padding again.

use thiserror::Error;

/// Line terminator used by every writer of the diary files.
pub const LINE_ENDING: &str = "\r\n";

/// Number of empty fields appended after the last real field.
const PADDING_FIELDS: usize = 2;

const DELIMITER: char = ',';
const QUOTE: char = '"';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("line contains {count} quoted fields; at most one is supported")]
    MultipleQuotedFields { count: usize },
}

/// Split one physical line into its fields.
///
/// A field is quoted when it starts with `"`; it ends at the next `"` that is
/// followed by a comma or by the end of the line, so commas in between are
/// content. A quote anywhere else is plain content. An unterminated quoted
/// field swallows the rest of the line. Trailing CR/LF and the two-field
/// padding are removed.
pub fn decode(line: &str) -> Result<Vec<String>, CodecError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let chars: Vec<char> = line.chars().collect();

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted_fields = 0usize;
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_quotes {
            let closes = c == QUOTE && chars.get(i + 1).map_or(true, |next| *next == DELIMITER);
            if closes {
                in_quotes = false;
            } else {
                current.push(c);
            }
            i += 1;
            continue;
        }

        match c {
            QUOTE if at_field_start => {
                in_quotes = true;
                quoted_fields += 1;
                at_field_start = false;
            }
            DELIMITER => {
                fields.push(std::mem::take(&mut current));
                at_field_start = true;
            }
            _ => {
                current.push(c);
                at_field_start = false;
            }
        }
        i += 1;
    }
    fields.push(current);

    if quoted_fields > 1 {
        return Err(CodecError::MultipleQuotedFields {
            count: quoted_fields,
        });
    }

    strip_padding(&mut fields);
    Ok(fields)
}

fn strip_padding(fields: &mut Vec<String>) {
    if fields.len() > PADDING_FIELDS
        && fields[fields.len() - PADDING_FIELDS..]
            .iter()
            .all(String::is_empty)
    {
        fields.truncate(fields.len() - PADDING_FIELDS);
    }
}

/// Join `fields` into one terminated line, quoting the field at
/// `quoted_index`. Embedded quotes are written as-is.
pub fn encode<S: AsRef<str>>(fields: &[S], quoted_index: usize) -> String {
    let mut line = String::new();

    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push(DELIMITER);
        }
        if index == quoted_index {
            line.push(QUOTE);
            line.push_str(field.as_ref());
            line.push(QUOTE);
        } else {
            line.push_str(field.as_ref());
        }
    }

    for _ in 0..PADDING_FIELDS {
        line.push(DELIMITER);
    }
    line.push_str(LINE_ENDING);
    line
}
