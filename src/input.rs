//! Parsing and range checks for user-entered values.
//!
//! Each parser is a pure `&str -> Result<T, InputError>` function. The
//! re-prompt loop lives in [`prompt_until_valid`], which works over any
//! reader/writer pair so it can be driven from a terminal or a test buffer.

use std::io::{self, BufRead, Write};

use crate::error::InputError;

/// Inclusive numeric range for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    /// Task difficulty: 1 to 5.
    pub const DIFFICULTY: Self = Self { min: 1.0, max: 5.0 };
    /// Task base attention: 1 to 5.
    pub const BASE_ATTENTION: Self = Self { min: 1.0, max: 5.0 };
    /// Task criticality: 0 to 5.
    pub const CRITICALITY: Self = Self { min: 0.0, max: 5.0 };
    /// Recovery effectiveness: 0 to 7.
    pub const EFFECTIVENESS: Self = Self { min: 0.0, max: 7.0 };

    /// Parses `text` and checks it against the range.
    pub fn parse(&self, text: &str) -> Result<f64, InputError> {
        parse_bounded(text, self.min, self.max)
    }
}

/// Parses an integer (surrounding whitespace ignored).
pub fn parse_int(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| InputError::NotAnInteger {
        input: trimmed.to_string(),
    })
}

/// Parses a finite floating-point number (surrounding whitespace ignored).
pub fn parse_float(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            input: trimmed.to_string(),
        }),
    }
}

/// Parses a number and checks `min <= value <= max`.
pub fn parse_bounded(text: &str, min: f64, max: f64) -> Result<f64, InputError> {
    let value = parse_float(text)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { value, min, max })
    }
}

/// Writes `prompt`, reads a line, and retries with `retry` until `parse`
/// accepts it.
///
/// Returns `UnexpectedEof` if input ends before a valid value arrives.
pub fn prompt_until_valid<R, W, T, F>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    retry: &str,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    let mut line = String::new();
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid value was entered",
            ));
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(%err, "rejected input");
                writeln!(writer, "{retry}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 42\n"), Ok(42));
        assert_eq!(
            parse_int("4.5"),
            Err(InputError::NotAnInteger {
                input: "4.5".into()
            })
        );
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("2.5"), Ok(2.5));
        assert!(parse_float("abc").is_err());
        assert!(parse_float("NaN").is_err());
        assert!(parse_float("inf").is_err());
    }

    #[test]
    fn test_parse_bounded() {
        assert_eq!(parse_bounded("5", 1.0, 5.0), Ok(5.0));
        assert_eq!(parse_bounded("1", 1.0, 5.0), Ok(1.0));
        assert_eq!(
            parse_bounded("5.1", 1.0, 5.0),
            Err(InputError::OutOfRange {
                value: 5.1,
                min: 1.0,
                max: 5.0
            })
        );
        assert!(FieldRange::EFFECTIVENESS.parse("7").is_ok());
        assert!(FieldRange::EFFECTIVENESS.parse("-0.5").is_err());
        assert!(FieldRange::CRITICALITY.parse("0").is_ok());
        assert!(FieldRange::DIFFICULTY.parse("0").is_err());
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let mut reader = Cursor::new("nope\n9\n3\n");
        let mut out = Vec::new();
        let value = prompt_until_valid(
            &mut reader,
            &mut out,
            "Difficulty: ",
            "Please enter a difficulty between 1 and 5.",
            |s| FieldRange::DIFFICULTY.parse(s),
        )
        .unwrap();

        assert_eq!(value, 3.0);
        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Difficulty: ").count(), 3);
        assert_eq!(
            transcript
                .matches("Please enter a difficulty between 1 and 5.")
                .count(),
            2
        );
    }

    #[test]
    fn test_prompt_eof() {
        let mut reader = Cursor::new("x\n");
        let mut out = Vec::new();
        let err = prompt_until_valid(&mut reader, &mut out, "> ", "again", parse_int).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
